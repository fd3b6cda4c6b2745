use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use super::Config;
use crate::ConfigSource;

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rnetsh_config::Config;
    /// use std::time::Duration;
    ///
    /// let config = Config::builder()
    ///     .tool_prefix("netsh -r fileserver")
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .expect("Failed to build config");
    ///
    /// assert_eq!(config.harness.timeout_secs, 60);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration.
///
/// Values set here override both the optional config file and the defaults,
/// and are attributed to `ConfigSource::Programmatic`. No environment
/// variables or directory searches are consulted.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    tool_prefix: Option<String>,
    timeout: Option<Duration>,
    require_success: Option<bool>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file beneath the programmatic values. A missing file is an error.
    #[must_use]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn tool_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tool_prefix = Some(prefix.into());
        self
    }

    /// Per-command timeout, truncated to whole seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn require_success(mut self, require_success: bool) -> Self {
        self.require_success = Some(require_success);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Merge the layers and validate the result.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();
        let source = ConfigSource::Programmatic;

        if let Some(path) = &self.config_file {
            config.apply_file(path)?;
        }

        if let Some(prefix) = self.tool_prefix {
            config.harness.tool_prefix = prefix;
            config.attribute("tool_prefix", source);
        }
        if let Some(timeout) = self.timeout {
            config.harness.timeout_secs = timeout.as_secs();
            config.attribute("timeout_secs", source);
        }
        if let Some(require_success) = self.require_success {
            config.harness.require_success = require_success;
            config.attribute("require_success", source);
        }
        if let Some(verbose) = self.verbose {
            config.logging.verbose = verbose;
            config.attribute("verbose", source);
        }

        config.validate()?;
        Ok(config)
    }
}
