use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use rnetsh_utils::types::ConfigSource;

pub const DEFAULT_TOOL_PREFIX: &str = "netsh";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Effective configuration after defaults, file, and builder are merged.
#[derive(Debug, Clone)]
pub struct Config {
    pub harness: HarnessConfig,
    pub logging: LoggingConfig,
    /// Which layer supplied each key
    pub source_attribution: HashMap<String, ConfigSource>,
    /// The file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

/// Settings for the process-backed execution harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Tokens placed before the action name, e.g. `netsh` or `netsh -r host`
    pub tool_prefix: String,
    pub timeout_secs: u64,
    /// Treat a non-zero exit status as an execution failure
    pub require_success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tool_prefix: DEFAULT_TOOL_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            require_success: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let source_attribution = ["tool_prefix", "timeout_secs", "require_success", "verbose"]
            .into_iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();

        Self {
            harness: HarnessConfig::default(),
            logging: LoggingConfig::default(),
            source_attribution,
            config_path: None,
        }
    }
}

/// On-disk layout of `.rnetsh/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlConfig {
    #[serde(default)]
    pub(crate) harness: TomlHarness,
    #[serde(default)]
    pub(crate) logging: TomlLogging,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlHarness {
    pub(crate) tool_prefix: Option<String>,
    pub(crate) timeout_secs: Option<u64>,
    pub(crate) require_success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlLogging {
    pub(crate) verbose: Option<bool>,
}
