use serde::{Deserialize, Serialize};

/// Source of a configuration value.
///
/// Precedence, highest first: programmatic (builder) > config file > default.
///
/// # Serialization
///
/// Serializes to lowercase strings: `"programmatic"`, `"config"`, `"default"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value set through `ConfigBuilder`.
    Programmatic,
    /// Value read from a configuration file.
    Config,
    /// Built-in default.
    Default,
}

impl ConfigSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Programmatic => "programmatic",
            Self::Config => "config",
            Self::Default => "default",
        }
    }
}
