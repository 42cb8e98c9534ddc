//! Tracing setup for the `workout-report` binary.
//!
//! Report lines own stdout, so log output goes to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log warnings and errors only, unless RUST_LOG says otherwise
pub fn init() {
    init_with_level("warn")
}

/// Install a compact stderr subscriber filtered at `default_level`
///
/// RUST_LOG takes precedence when set. Calling this more than once is harmless.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
