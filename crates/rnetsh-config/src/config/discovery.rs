use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use rnetsh_utils::error::ConfigError;

use super::Config;
use super::model::TomlConfig;
use crate::ConfigSource;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "RNETSH_CONFIG";

/// Search `start_dir` and its ancestors for `.rnetsh/config.toml`.
///
/// The search stops at the filesystem root or at the first repository root
/// (`.git`, `.hg`, `.svn`) without a config file.
#[must_use]
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);

    while let Some(dir) = current {
        let candidate = dir.join(".rnetsh").join("config.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        if [".git", ".hg", ".svn"]
            .iter()
            .any(|marker| dir.join(marker).exists())
        {
            break;
        }
        current = dir.parent();
    }

    None
}

impl Config {
    /// Discover configuration from the environment and the current directory.
    pub fn discover() -> Result<Self> {
        let start_dir = env::current_dir().context("Failed to get current directory")?;
        Self::discover_from(&start_dir)
    }

    /// Discover configuration starting from a specific directory.
    ///
    /// `RNETSH_CONFIG` takes precedence over the upward search.
    pub fn discover_from(start_dir: &Path) -> Result<Self> {
        let path = env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| find_config_file(start_dir));

        let mut config = Self::default();
        if let Some(path) = path {
            config.apply_file(&path)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn apply_file(&mut self, path: &Path) -> Result<()> {
        let file = load_config_file(path)?;
        let source = ConfigSource::Config;

        if let Some(prefix) = file.harness.tool_prefix {
            self.harness.tool_prefix = prefix;
            self.attribute("tool_prefix", source);
        }
        if let Some(timeout_secs) = file.harness.timeout_secs {
            self.harness.timeout_secs = timeout_secs;
            self.attribute("timeout_secs", source);
        }
        if let Some(require_success) = file.harness.require_success {
            self.harness.require_success = require_success;
            self.attribute("require_success", source);
        }
        if let Some(verbose) = file.logging.verbose {
            self.logging.verbose = verbose;
            self.attribute("verbose", source);
        }

        self.config_path = Some(path.to_path_buf());
        Ok(())
    }

    pub(crate) fn attribute(&mut self, key: &str, source: ConfigSource) {
        self.source_attribution.insert(key.to_string(), source);
    }
}

fn load_config_file(path: &Path) -> Result<TomlConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display()));
        }
    };

    toml::from_str(&content).map_err(|e| {
        anyhow::Error::from(ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    })
}
