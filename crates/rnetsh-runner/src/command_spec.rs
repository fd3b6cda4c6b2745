use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::error::RunnerError;

// ============================================================================
// CommandSpec - argv-style process specification
// ============================================================================

/// Specification for a command to execute.
///
/// Rendered command lines are turned into a `CommandSpec` before anything is
/// spawned, so arguments always cross the process boundary as discrete argv
/// elements rather than a shell string.
///
/// # Example
///
/// ```rust
/// use rnetsh_runner::CommandSpec;
/// use std::ffi::OsString;
///
/// let cmd = CommandSpec::parse(r#"netsh advfirewall firewall show rule name="Remote Desktop""#)
///     .unwrap();
///
/// assert_eq!(cmd.program, OsString::from("netsh"));
/// assert_eq!(cmd.args.len(), 5);
/// assert_eq!(cmd.args[4], OsString::from("name=Remote Desktop"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandSpec {
    /// The program to execute
    pub program: OsString,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<OsString>,
    /// Optional working directory
    pub cwd: Option<PathBuf>,
    /// Optional environment overrides
    pub env: Option<HashMap<OsString, OsString>>,
}

impl CommandSpec {
    /// Create a new `CommandSpec` with the given program.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: None,
        }
    }

    /// Split a rendered command line into program and arguments.
    ///
    /// Splitting follows POSIX shell word rules via `shell_words`, without any
    /// expansion: `name="Remote Desktop"` becomes the single argument
    /// `name=Remote Desktop`. An unquoted backslash escapes the next
    /// character, so Windows paths in a tool prefix must be quoted
    /// (`"C:\Windows\System32\netsh.exe"`). Rendered values are always
    /// quoted that way when they contain a backslash.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::EmptyCommandLine`] when there is no program
    /// token and [`RunnerError::UnterminatedQuote`] for an unbalanced quote.
    pub fn parse(command_line: &str) -> Result<Self, RunnerError> {
        let mut tokens = shell_words::split(command_line)
            .map_err(|_| RunnerError::UnterminatedQuote {
                command_line: command_line.to_string(),
            })?
            .into_iter();
        let program = tokens.next().ok_or(RunnerError::EmptyCommandLine)?;
        Ok(Self::new(program).args(tokens))
    }

    /// Add a single argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    #[must_use]
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set an environment variable for the command.
    #[must_use]
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Convert this `CommandSpec` into a `std::process::Command`.
    ///
    /// The resulting `Command` uses argv-style argument passing only.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        if let Some(ref env) = self.env {
            for (key, value) in env {
                cmd.env(key, value);
            }
        }

        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
