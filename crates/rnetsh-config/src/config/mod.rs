mod builder;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use discovery::{CONFIG_ENV_VAR, find_config_file};
pub use model::*;

use std::time::Duration;

impl Config {
    /// Per-command timeout for the process harness.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.harness.timeout_secs)
    }

    /// Install the global tracing subscriber, verbose when `[logging]
    /// verbose` is set.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already installed.
    pub fn init_tracing(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        rnetsh_utils::logging::init_tracing(self.logging.verbose)
    }

    /// Filter directives the subscriber uses when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_directives(&self) -> &'static str {
        rnetsh_utils::logging::default_directives(self.logging.verbose)
    }
}
