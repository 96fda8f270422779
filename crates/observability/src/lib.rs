//! Tracing/logging setup shared by every process that places orders.

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation (filters, formatting).
pub mod logging;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init(&ObservabilityConfig::from_env());
}
