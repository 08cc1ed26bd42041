//! Tracing library sink implementation.

use super::LogSink;
use std::error::Error;

/// Sink implementation that delegates to the `tracing` crate.
///
/// Bridges the [`LogSink`] tiers to `tracing` events, so records flow into
/// whatever subscriber the host has installed (console, file, JSON, …). The
/// tag and error travel as structured fields on each event. `tracing` has no
/// tier above `error`, so `fatal` records are emitted at `error` level with
/// a `fatal = true` field.
///
/// # Example
///
/// ```ignore
/// use tagsink::{LogSink, TracingSink};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
/// sink.info("App", "using tracing backend", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn verbose(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::trace!(tag, error = %err, "{}", message),
            None => tracing::trace!(tag, "{}", message),
        }
    }

    fn debug(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::debug!(tag, error = %err, "{}", message),
            None => tracing::debug!(tag, "{}", message),
        }
    }

    fn info(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::info!(tag, error = %err, "{}", message),
            None => tracing::info!(tag, "{}", message),
        }
    }

    fn warn(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::warn!(tag, error = %err, "{}", message),
            None => tracing::warn!(tag, "{}", message),
        }
    }

    fn error(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::error!(tag, error = %err, "{}", message),
            None => tracing::error!(tag, "{}", message),
        }
    }

    fn fatal(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        match error {
            Some(err) => tracing::error!(tag, fatal = true, error = %err, "{}", message),
            None => tracing::error!(tag, fatal = true, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }

    #[test]
    fn test_tracing_sink_new() {
        let sink = TracingSink::new();
        let _ = sink;
    }

    #[test]
    fn test_tracing_sink_as_trait_object() {
        let sink: Box<dyn LogSink> = Box::new(TracingSink);
        // These emit via tracing (may not appear without a subscriber)
        sink.verbose("Test", "verbose message", None);
        sink.debug("Test", "debug message", None);
        sink.info("Test", "info message", None);
        sink.warn("Test", "warn message", None);
        sink.error("Test", "error message", None);
        sink.fatal("Test", "fatal message", None);
    }

    #[test]
    fn test_tracing_sink_with_error() {
        let sink = TracingSink;
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        sink.error("Test", "write failed", Some(&err));
    }
}
