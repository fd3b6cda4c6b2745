//! rnetsh - typed action proxies for netsh-style command-line tools
//!
//! An action (`advfirewall`, `http`, `interface ipv4`, ...) is described as a
//! table of sub-commands. Calling a sub-command renders one command line,
//! hands it to an [`ExecutionHarness`], and converts the raw text output into
//! the declared return type.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rnetsh::{Config, Record, action_interface};
//!
//! action_interface! {
//!     pub struct Firewall {
//!         #[command("show rule")]
//!         fn show_rule(name: &str) -> Vec<Record>;
//!
//!         #[command("set rule")]
//!         fn set_rule(name: &str, #[param("new enable")] #[style(YesNo)] enable: bool);
//!     }
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::discover()?;
//! config.init_tracing().map_err(anyhow::Error::msg)?;
//! let firewall = Firewall::from_config("advfirewall firewall", &config);
//!
//! for rule in firewall.show_rule("all")? {
//!     println!("{:?}", rule.get("Rule Name"));
//! }
//! firewall.set_rule("Remote Desktop", true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Processing
//!
//! | Return type | Binding |
//! |-------------|---------|
//! | `()` | output discarded |
//! | `T: Response` | one `T` from the whole output |
//! | `Vec<T>`, `T: Response` | one `T` per blank-line separated record |
//! | with `#[processor(..)]` | the processor's single or multi conversion |
//!
//! A custom processor declaring both conversions, or only the conversion of
//! the other shape, fails on the first call of the method with a
//! configuration error. Nothing is executed in that case.

pub mod action;
pub mod args;
mod macros;
pub mod processor;
pub mod proxy;
pub mod render;
pub mod response;

pub use rnetsh_config as config;
pub use rnetsh_runner as runner;
pub use rnetsh_utils::{error, logging};

pub use action::{ActionDescriptor, BooleanStyle, MethodSpec, ParamSpec};
pub use args::{Arg, CommandEnum, ToArg};
pub use rnetsh_utils::error::{ActionError, ErrorCategory, UserFriendlyError};
pub use processor::{CustomProcessor, ProcessorBinding, ResolutionError, resolve};
pub use proxy::ActionProxy;
pub use render::{MethodInvocation, render};
pub use response::{ActionReturn, Annotated, ParseError, Record, Response, ReturnShape, split_records};
pub use rnetsh_config::{Config, ConfigBuilder};
pub use rnetsh_runner::{ExecutionHarness, HarnessError, ProcessHarness};
