//! Per-category logger.
//!
//! A [`TagLogger`] is the leaf of the adapter: one instance per category
//! name, holding the sink tag, the category display name, the shared filter,
//! and a back-reference to the current scope provider. It decides whether a
//! record is emitted, composes the message text, and dispatches to the sink
//! call matching the record's severity.

use crate::error::LoggerError;
use crate::filter::{AcceptAllFilter, Filter};
use crate::scope::{NoopScopeProvider, Scope, ScopeProvider};
use crate::severity::Severity;
use crate::sink::LogSink;
use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::sync::{Arc, RwLock};

/// Display name substituted when a logger is created with an empty category
/// name.
pub const FALLBACK_LOGGER_NAME: &str = "TagLogger";

/// Numeric identifier of a log event.
///
/// Accepted by [`TagLogger::log`] for compatibility with front ends that
/// assign ids to well-known events; it is not rendered into the emitted
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventId(pub u32);

impl From<u32> for EventId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A logger for a single category that writes to a tag-based sink.
///
/// Loggers are normally obtained from a
/// [`TagLoggerProvider`](crate::TagLoggerProvider), which caches one
/// instance per category name and keeps the scope provider of every
/// instance current. Direct construction is also supported for hosts that
/// manage their own instances.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagsink::{EventId, MemorySink, Severity, TagLogger};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = TagLogger::new("App", "Net", sink.clone(), None, None)
///     .expect("tag is non-empty");
///
/// logger.log(Severity::Information, EventId::default(), "started", None, |state: &str, _| {
///     state.to_string()
/// });
/// assert_eq!(sink.records()[0].message, "started");
/// ```
pub struct TagLogger {
    tag: String,
    name: String,
    sink: Arc<dyn LogSink>,
    filter: Arc<dyn Filter>,
    scope_provider: RwLock<Arc<dyn ScopeProvider>>,
}

impl TagLogger {
    /// Create a logger.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag the sink files records under; must not be empty
    /// * `name` - Category name; an empty name is replaced by
    ///   [`FALLBACK_LOGGER_NAME`]
    /// * `sink` - Sink that performs the writes
    /// * `scope_provider` - Scope source; `None` means no scope context
    /// * `filter` - Severity filter; `None` accepts everything except
    ///   [`Severity::Off`]
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyTag`] if `tag` is empty.
    pub fn new(
        tag: impl Into<String>,
        name: impl Into<String>,
        sink: Arc<dyn LogSink>,
        scope_provider: Option<Arc<dyn ScopeProvider>>,
        filter: Option<Arc<dyn Filter>>,
    ) -> Result<Self, LoggerError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(LoggerError::EmptyTag);
        }
        Ok(Self::assemble(
            tag,
            name.into(),
            sink,
            scope_provider.unwrap_or_else(|| Arc::new(NoopScopeProvider)),
            filter.unwrap_or_else(|| Arc::new(AcceptAllFilter)),
        ))
    }

    /// Assembly path for callers that have already validated the tag.
    pub(crate) fn assemble(
        tag: String,
        name: String,
        sink: Arc<dyn LogSink>,
        scope_provider: Arc<dyn ScopeProvider>,
        filter: Arc<dyn Filter>,
    ) -> Self {
        let name = if name.is_empty() {
            FALLBACK_LOGGER_NAME.to_string()
        } else {
            name
        };
        Self {
            tag,
            name,
            sink,
            filter,
            scope_provider: RwLock::new(scope_provider),
        }
    }

    /// Returns the sink tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if records at `severity` would be emitted.
    ///
    /// Always false for [`Severity::Off`]; otherwise the configured filter
    /// decides. Evaluated by [`log`](Self::log) before any formatting work.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity != Severity::Off && self.filter.is_enabled(&self.name, severity)
    }

    /// Begin a logging scope carrying `state`.
    ///
    /// Delegates to the current scope provider. The returned [`Scope`]
    /// releases on drop whether or not a real provider is attached.
    pub fn begin_scope(&self, state: &dyn fmt::Display) -> Scope {
        match self.scope_provider.read() {
            Ok(provider) => provider.push(state),
            Err(_) => Scope::noop(),
        }
    }

    /// Emit a record.
    ///
    /// The formatter renders `state` (and may consult `error`) into the
    /// message text. If an error is attached, its rendered detail (display
    /// text plus the `source()` chain) is appended after the message,
    /// separated by a blank line, and the error object itself is passed
    /// through to the sink. A record whose composed body is empty is
    /// suppressed entirely.
    ///
    /// Records below the filter threshold return before the formatter runs.
    pub fn log<S, F>(
        &self,
        severity: Severity,
        _event_id: EventId,
        state: &S,
        error: Option<&dyn Error>,
        formatter: F,
    ) where
        S: ?Sized,
        F: FnOnce(&S, Option<&dyn Error>) -> String,
    {
        if !self.enabled(severity) {
            return;
        }

        let message = formatter(state, error);
        let body = match error {
            Some(err) => {
                let detail = render_error(err);
                if message.is_empty() {
                    detail
                } else {
                    format!("{message}\n\n{detail}")
                }
            }
            None => message,
        };
        if body.is_empty() {
            return;
        }

        match severity {
            Severity::Trace => self.sink.verbose(&self.tag, &body, error),
            Severity::Debug => self.sink.debug(&self.tag, &body, error),
            Severity::Information => self.sink.info(&self.tag, &body, error),
            Severity::Warning => self.sink.warn(&self.tag, &body, error),
            Severity::Error => self.sink.error(&self.tag, &body, error),
            Severity::Critical => self.sink.fatal(&self.tag, &body, error),
            // Gated by enabled() above
            Severity::Off => {}
        }
    }

    /// Replace the scope provider. Called by the owning provider when its
    /// scope source changes.
    pub(crate) fn set_scope_provider(&self, provider: Arc<dyn ScopeProvider>) {
        if let Ok(mut current) = self.scope_provider.write() {
            *current = provider;
        }
    }
}

impl fmt::Debug for TagLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLogger")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .finish()
    }
}

/// Renders an error's display text followed by its `source()` chain, one
/// cause per line.
fn render_error(error: &dyn Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(text, "\nCaused by: {cause}");
        source = cause.source();
    }
    text
}
