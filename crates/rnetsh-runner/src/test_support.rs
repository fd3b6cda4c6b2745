//! Harness doubles for tests.
//!
//! Enabled with the `test-utils` feature.

use std::sync::Mutex;

use crate::{ExecutionHarness, HarnessError};

/// Records every command it is asked to run and answers with a canned response.
#[derive(Debug, Default)]
pub struct RecordingHarness {
    response: String,
    commands: Mutex<Vec<String>>,
}

impl RecordingHarness {
    /// A harness that answers every command with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A harness that answers every command with `response`.
    #[must_use]
    pub fn responding(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// The most recently executed command line, if any.
    pub fn last_command(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Every executed command line, oldest first.
    pub fn commands(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.commands
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ExecutionHarness for RecordingHarness {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
        self.lock().push(command_line.to_string());
        Ok(self.response.clone())
    }
}

/// Fails every command with a custom error carrying `message`.
#[derive(Debug, Clone)]
pub struct FailingHarness {
    message: String,
}

impl FailingHarness {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ExecutionHarness for FailingHarness {
    fn execute(&self, _command_line: &str) -> Result<String, HarnessError> {
        Err(HarnessError::custom(self.message.clone()))
    }
}
