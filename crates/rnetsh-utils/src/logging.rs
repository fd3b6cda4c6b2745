//! Logging and observability for proxied actions
//!
//! Structured logging via `tracing`. Every proxied call runs inside an
//! `action_invocation` span carrying the action and method names; the
//! helpers below emit the events recorded within it.

use tracing::{Level, debug, span, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Filter directives used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "rnetsh=debug,rnetsh_runner=debug,info"
    } else {
        "rnetsh=info,warn"
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise verbose mode logs rnetsh at debug
/// level with span timings and targets; the default is a compact info-level
/// format.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if verbose {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Span wrapping one proxied method call.
pub fn invocation_span(action: &str, method: &str) -> tracing::Span {
    span!(
        Level::DEBUG,
        "action_invocation",
        action = %action,
        method = %method,
    )
}

pub fn log_command_rendered(command: &str) {
    debug!(command = %command, "Rendered command");
}

pub fn log_binding_resolved(method: &str, binding: &str, cached: bool) {
    debug!(method = %method, binding = %binding, cached, "Resolved response processor");
}

pub fn log_invocation_complete(method: &str, duration_ms: u128, output_bytes: usize) {
    debug!(
        method = %method,
        duration_ms = %duration_ms,
        output_bytes,
        "Action completed"
    );
}

pub fn log_invocation_error(method: &str, error: &dyn std::error::Error) {
    warn!(method = %method, error = %error, "Action failed");
}
