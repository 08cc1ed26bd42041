//! No-operation sink implementation.

use super::LogSink;
use std::error::Error;

/// A sink that discards all records.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where write overhead should be eliminated
/// - Silent operation modes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn verbose(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}

    #[inline]
    fn debug(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}

    #[inline]
    fn info(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}

    #[inline]
    fn warn(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}

    #[inline]
    fn error(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}

    #[inline]
    fn fatal(&self, _tag: &str, _message: &str, _error: Option<&dyn Error>) {}
}
