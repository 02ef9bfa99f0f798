//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.
//! Stdout is reserved for the tool's own output. Defaults to warnings
//! only; `RUST_LOG=tscrub=info` shows per-file progress.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber has
/// already been set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tscrub=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Err` if logging has already been initialized; useful in tests
/// where the subscriber may be set by an earlier case.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tscrub=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_writer(std::io::stderr),
        )
        .try_init()
}
