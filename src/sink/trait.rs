//! Log sink trait definition.

use std::error::Error;

/// A tag-based log sink.
///
/// Exposes one call per severity tier, each accepting a tag, a message, and
/// an optional error object. Calls have no return value and no failure mode
/// visible to this layer; a sink that can fail must handle or swallow its
/// own failures.
///
/// Implementations must be `Send + Sync` so a single sink instance can be
/// shared by every logger a provider creates.
///
/// # Example
///
/// ```
/// use tagsink::{LogSink, NoopSink};
/// use std::sync::Arc;
///
/// let sink: Arc<dyn LogSink> = Arc::new(NoopSink);
/// sink.info("App", "started", None);
/// ```
pub trait LogSink: Send + Sync {
    /// Write a verbose-tier record.
    fn verbose(&self, tag: &str, message: &str, error: Option<&dyn Error>);

    /// Write a debug-tier record.
    fn debug(&self, tag: &str, message: &str, error: Option<&dyn Error>);

    /// Write an info-tier record.
    fn info(&self, tag: &str, message: &str, error: Option<&dyn Error>);

    /// Write a warn-tier record.
    fn warn(&self, tag: &str, message: &str, error: Option<&dyn Error>);

    /// Write an error-tier record.
    fn error(&self, tag: &str, message: &str, error: Option<&dyn Error>);

    /// Write a record at the highest-severity diagnostic tier.
    fn fatal(&self, tag: &str, message: &str, error: Option<&dyn Error>);
}
