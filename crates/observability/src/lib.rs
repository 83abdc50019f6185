//! Tracing/logging setup shared by pantry binaries.

pub use crate::tracing::{LogFormat, UnknownLogFormat};

/// Initialize process-wide tracing/logging in the given output format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, output formats).
pub mod tracing;
