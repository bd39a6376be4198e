//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
///
/// Respects `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize tracing subscriber with an explicit default filter
///
/// `RUST_LOG` still wins when set; `default_filter` applies otherwise.
pub fn init_tracing_with(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
