//! Structured logging with `tracing`.
//!
//! Library crates only emit events and spans; the binary decides where they
//! go by calling [`init_subscriber`] once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter directive when neither `RUST_LOG` nor a configured level is set.
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LEVEL`].
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level to display, e.g. `"info"` or `"excerpt_html=debug"`.
pub fn init_subscriber(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
