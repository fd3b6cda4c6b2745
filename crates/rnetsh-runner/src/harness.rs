//! The execution boundary consumed by action proxies

use std::sync::Arc;
use std::time::Duration;

use crate::error::HarnessError;
use crate::{CommandSpec, NativeRunner, ProcessRunner};

/// Default time a single command may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a fully rendered command line and returns its raw textual output.
///
/// Implementations own every process concern (spawning, timeouts,
/// cancellation). Whatever error they return reaches the proxy's caller
/// unchanged.
pub trait ExecutionHarness {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError>;
}

impl<H: ExecutionHarness + ?Sized> ExecutionHarness for &H {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
        (**self).execute(command_line)
    }
}

impl<H: ExecutionHarness + ?Sized> ExecutionHarness for Arc<H> {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
        (**self).execute(command_line)
    }
}

impl<H: ExecutionHarness + ?Sized> ExecutionHarness for Box<H> {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
        (**self).execute(command_line)
    }
}

/// Harness that spawns the rendered command as a process.
///
/// The command line is split with [`CommandSpec::parse`]; the first token is
/// the program. Stdout is returned as the raw text. When `require_success`
/// is set (the default) a non-zero exit becomes
/// [`HarnessError::NonZeroExit`] carrying stdout, since netsh reports most
/// failures there rather than on stderr.
#[derive(Debug, Clone)]
pub struct ProcessHarness<R = NativeRunner> {
    runner: R,
    timeout: Duration,
    require_success: bool,
}

impl ProcessHarness {
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(NativeRunner::new())
    }
}

impl Default for ProcessHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> ProcessHarness<R> {
    #[must_use]
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            timeout: DEFAULT_TIMEOUT,
            require_success: true,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn require_success(mut self, require_success: bool) -> Self {
        self.require_success = require_success;
        self
    }

    #[must_use]
    pub fn configured_timeout(&self) -> Duration {
        self.timeout
    }
}

impl<R: ProcessRunner> ExecutionHarness for ProcessHarness<R> {
    fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
        let cmd = CommandSpec::parse(command_line)?;
        let output = self.runner.run(&cmd, self.timeout)?;

        if self.require_success && !output.success() {
            let stdout = output.stdout_string();
            let detail = if stdout.trim().is_empty() {
                output.stderr_string()
            } else {
                stdout
            };
            return Err(HarnessError::NonZeroExit {
                command: command_line.to_string(),
                exit_code: output.exit_code,
                output: detail.trim().to_string(),
            });
        }

        Ok(output.stdout_string())
    }
}
