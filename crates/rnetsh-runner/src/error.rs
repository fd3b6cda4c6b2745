//! Error types for the execution boundary

use thiserror::Error;

/// Failures while turning a command line into a finished process.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Command line is empty")]
    EmptyCommandLine,

    #[error("Unterminated quote in command line: {command_line}")]
    UnterminatedQuote { command_line: String },

    #[error("Failed to spawn '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("Process monitoring failed: {reason}")]
    WaitFailed { reason: String },

    #[error("Execution timed out after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}

/// Error returned by an [`ExecutionHarness`](crate::ExecutionHarness).
///
/// The action proxy never inspects or rewraps these; they reach the caller
/// exactly as the harness produced them.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("'{command}' exited with status {exit_code:?}: {output}")]
    NonZeroExit {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl HarnessError {
    /// Wrap an arbitrary error raised by a caller-supplied harness.
    pub fn custom(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Custom(err.into())
    }
}
