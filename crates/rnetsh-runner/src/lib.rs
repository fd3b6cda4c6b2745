//! Execution boundary for rendered netsh command lines
//!
//! The action proxy only ever hands a finished command line to an
//! [`ExecutionHarness`] and gets raw text back. This crate provides the
//! process-backed harness used in production and the plumbing beneath it.
//!
//! # Security Model
//!
//! Command lines are split into argv elements by [`CommandSpec::parse`] and
//! spawned without a shell. Quoted values stay a single argument and shell
//! metacharacters are passed through literally.

pub mod command_spec;
pub mod error;
pub mod harness;
pub mod native;
pub mod process;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use command_spec::CommandSpec;
pub use error::{HarnessError, RunnerError};
pub use harness::{ExecutionHarness, ProcessHarness};
pub use native::NativeRunner;
pub use process::{ProcessOutput, ProcessRunner};
