//! Logging setup shared by the catalog binaries and tests.

/// Tracing subscriber configuration.
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings};

/// Install the process-wide subscriber with default settings.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init(&LogSettings::default());
}
