use std::fmt;
use thiserror::Error;

pub use rnetsh_runner::{HarnessError, RunnerError};

/// Error returned by every proxied action method.
///
/// | Variant | Raised when | Surfaced |
/// |---------|-------------|----------|
/// | `AmbiguousProcessor` | a custom processor declares single and multi conversions | first invocation |
/// | `UnsatisfiableProcessor` | no processor fits the declared return type | first invocation |
/// | `ArgumentCount` | argument list and parameter table disagree | every invocation |
/// | `Execution` | the execution harness failed | verbatim |
/// | `Parse` | raw output does not fit the response type | every invocation |
///
/// Nothing here is retried by the library.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(
        "Ambiguous response processor for {method}: '{processor}' declares both a single and a multi conversion"
    )]
    AmbiguousProcessor { method: String, processor: String },

    #[error("No applicable response processor for {method}: {reason}")]
    UnsatisfiableProcessor { method: String, reason: String },

    #[error("{method} takes {expected} argument(s) but {actual} were supplied")]
    ArgumentCount {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Execution(#[from] HarnessError),

    #[error("Failed to parse response of {method}: {reason} (at {fragment:?})")]
    Parse {
        method: String,
        reason: String,
        fragment: String,
    },
}

impl ActionError {
    /// True for errors caused by how the interface was declared rather than
    /// by what happened at runtime.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::AmbiguousProcessor { .. }
                | Self::UnsatisfiableProcessor { .. }
                | Self::ArgumentCount { .. }
        )
    }

    /// Formats the error with context and suggestions for display to a user.
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut out = format!("Error: {}", self.user_message());
        if let Some(context) = self.context() {
            out.push_str(&format!("\n\nContext: {context}"));
        }
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\n\nSuggestions:");
            for suggestion in suggestions {
                out.push_str(&format!("\n  - {suggestion}"));
            }
        }
        out
    }
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Execution,
    ResponseParsing,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Execution => write!(f, "Execution"),
            Self::ResponseParsing => write!(f, "Response Parsing"),
        }
    }
}

impl UserFriendlyError for ActionError {
    fn user_message(&self) -> String {
        match self {
            Self::AmbiguousProcessor { method, processor } => format!(
                "The response processor '{processor}' on '{method}' is ambiguous"
            ),
            Self::UnsatisfiableProcessor { method, reason } => {
                format!("'{method}' has no usable response processor: {reason}")
            }
            Self::ArgumentCount {
                method,
                expected,
                actual,
            } => format!("'{method}' expects {expected} argument(s), got {actual}"),
            Self::Execution(err) => format!("The command failed: {err}"),
            Self::Parse { method, reason, .. } => {
                format!("The output of '{method}' could not be read: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::AmbiguousProcessor { .. } => Some(
                "A custom processor must convert either one value or a sequence, never both."
                    .to_string(),
            ),
            Self::UnsatisfiableProcessor { .. } => Some(
                "Custom processors must provide the conversion that matches the declared return shape."
                    .to_string(),
            ),
            Self::ArgumentCount { .. } => None,
            Self::Execution(HarnessError::NonZeroExit { output, .. }) if !output.is_empty() => {
                Some(format!("Tool output: {output}"))
            }
            Self::Execution(_) => None,
            Self::Parse { fragment, .. } => Some(format!("Unparsable fragment: {fragment:?}")),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AmbiguousProcessor { .. } => vec![
                "Drop either the single or the multi conversion from the processor".to_string(),
            ],
            Self::UnsatisfiableProcessor { .. } => vec![
                "Declare a single conversion for scalar return types".to_string(),
                "Declare a multi conversion for Vec<T> return types".to_string(),
                "Remove the processor to fall back to default record parsing".to_string(),
            ],
            Self::ArgumentCount { .. } => vec![
                "Keep the parameter table and the argument list in the same order and length"
                    .to_string(),
            ],
            Self::Execution(HarnessError::Runner(RunnerError::Timeout { .. })) => vec![
                "Raise [harness].timeout_secs in .rnetsh/config.toml".to_string(),
            ],
            Self::Execution(HarnessError::Runner(RunnerError::SpawnFailed { .. })) => vec![
                "Check that the tool named by the prefix is installed and on PATH".to_string(),
            ],
            Self::Execution(_) => Vec::new(),
            Self::Parse { .. } => vec![
                "Compare the tool's output with the fields the response type requires".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::AmbiguousProcessor { .. }
            | Self::UnsatisfiableProcessor { .. }
            | Self::ArgumentCount { .. } => ErrorCategory::Configuration,
            Self::Execution(_) => ErrorCategory::Execution,
            Self::Parse { .. } => ErrorCategory::ResponseParsing,
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile { path, reason } => {
                format!("Configuration file {path} has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile { .. } => Some(
                "Configuration files must be valid TOML with optional [harness] and [logging] sections."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } => Some(
                "rnetsh searches for .rnetsh/config.toml from the current directory upward, or reads RNETSH_CONFIG."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile { .. } => vec!["Check the TOML syntax of the file".to_string()],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "timeout_secs" => vec!["Use a whole number of seconds between 1 and 3600".to_string()],
                "tool_prefix" => vec!["Use the tool's executable name, e.g. 'netsh'".to_string()],
                _ => vec!["Remove the option to use the default value".to_string()],
            },
            Self::NotFound { .. } => vec![
                "Unset RNETSH_CONFIG or point it at an existing file".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}
