//! In-memory recording sink.

use super::LogSink;
use std::error::Error;
use std::sync::Mutex;

/// Severity tier of a recorded sink call.
///
/// Mirrors the six [`LogSink`] methods so tests can assert on which tier a
/// record was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkLevel {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl SinkLevel {
    /// Returns the tier name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

/// A single recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    /// Tier the record was delivered to
    pub level: SinkLevel,
    /// Tag supplied with the record
    pub tag: String,
    /// Composed message text
    pub message: String,
    /// Rendered error object, if one was attached
    pub error: Option<String>,
}

/// A sink that records every call for later inspection.
///
/// The deterministic counterpart to [`NoopSink`](super::NoopSink): instead
/// of discarding records it appends them, in call order, to an internal
/// buffer that tests can drain and assert on.
///
/// # Example
///
/// ```
/// use tagsink::{LogSink, MemorySink, SinkLevel};
///
/// let sink = MemorySink::new();
/// sink.info("App", "started", None);
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level, SinkLevel::Info);
/// assert_eq!(records[0].tag, "App");
/// assert_eq!(records[0].message, "started");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all records captured so far, in call order.
    pub fn records(&self) -> Vec<SinkRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the number of records captured so far.
    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Returns true if no records have been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all captured records.
    pub fn clear(&self) {
        match self.records.lock() {
            Ok(mut records) => records.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn record(&self, level: SinkLevel, tag: &str, message: &str, error: Option<&dyn Error>) {
        let record = SinkRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
        };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

impl LogSink for MemorySink {
    fn verbose(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Verbose, tag, message, error);
    }

    fn debug(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Debug, tag, message, error);
    }

    fn info(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Info, tag, message, error);
    }

    fn warn(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Warn, tag, message, error);
    }

    fn error(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Error, tag, message, error);
    }

    fn fatal(&self, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.record(SinkLevel::Fatal, tag, message, error);
    }
}
