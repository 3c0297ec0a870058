//! Logging setup shared by every process embedding the console core.

/// Install the process-wide subscriber (JSON lines, `RUST_LOG` filter,
/// `info` by default).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

/// Subscriber for unit and integration tests: human-readable, captured by
/// the test harness, `debug` unless `RUST_LOG` says otherwise.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Subscriber setup (filters, formatters).
pub mod tracing;

pub use crate::tracing::{LOG_FORMAT_VAR, LogFormat};
