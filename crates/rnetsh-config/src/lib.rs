//! Configuration for the rnetsh process harness and logging
//!
//! Precedence: builder (programmatic) > config file > defaults. The config
//! file is `.rnetsh/config.toml`, found by searching upward from the working
//! directory, or the path named by `RNETSH_CONFIG`.

mod config;

pub use config::*;
pub use rnetsh_utils::types::ConfigSource;
