//! Diagnostic logging setup.
//!
//! Library code only emits `tracing` events; binaries decide where they go.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Installs a global subscriber that writes to stderr and honours `RUST_LOG`.
///
/// Defaults to `warn` when the variable is unset. Stdout stays free for reports.
pub fn init_subscriber() {
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}

/// Subscriber for tests, installed only for the current thread while the guard lives.
pub fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .set_default()
}
