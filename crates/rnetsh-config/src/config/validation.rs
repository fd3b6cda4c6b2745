use rnetsh_utils::error::ConfigError;

use super::{Config, MAX_TIMEOUT_SECS};

impl Config {
    /// Validate configuration values
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.harness.tool_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "tool_prefix".to_string(),
                value: "must not be empty".to_string(),
            });
        }

        if self.harness.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                value: "must be greater than 0".to_string(),
            });
        }
        if self.harness.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                value: format!("exceeds maximum limit of {MAX_TIMEOUT_SECS}"),
            });
        }

        Ok(())
    }
}
