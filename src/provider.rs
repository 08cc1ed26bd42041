//! Logger provider.
//!
//! The provider is the composition root of the adapter: it owns the sink
//! tag, the shared filter, and the current scope provider, and manufactures
//! one [`TagLogger`] per category name. Lookups are lock-free on the hot
//! path; creation uses an atomic get-or-insert so concurrent first requests
//! for the same name resolve to a single shared instance.

use crate::error::LoggerError;
use crate::filter::{AcceptAllFilter, Filter};
use crate::logger::TagLogger;
use crate::scope::{NoopScopeProvider, ScopeProvider};
use crate::sink::LogSink;
use dashmap::DashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Provider that creates and caches one [`TagLogger`] per category name.
///
/// All loggers created by a provider share its tag, filter, and sink, and
/// always reflect its most recently set scope provider: replacement is
/// propagated eagerly to every cached logger.
///
/// The registry grows monotonically: once a logger exists for a name it is
/// never replaced, so repeated [`create_logger`](Self::create_logger) calls
/// are identity-stable.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagsink::{MemorySink, TagLoggerProvider};
///
/// let sink = Arc::new(MemorySink::new());
/// let provider = TagLoggerProvider::new("App", sink).expect("tag is non-empty");
///
/// let net = provider.create_logger("Net");
/// let again = provider.create_logger("Net");
/// assert!(Arc::ptr_eq(&net, &again));
/// ```
pub struct TagLoggerProvider {
    tag: String,
    filter: Arc<dyn Filter>,
    sink: Arc<dyn LogSink>,
    loggers: DashMap<String, Arc<TagLogger>>,
    /// Current scope source. The lock also serializes `set_scope_provider`
    /// against in-flight creations: creators hold the read guard across the
    /// registry insert, so a replacement either happens-before a creation
    /// (the new logger reads the new source) or its sweep observes the
    /// inserted logger.
    scope_provider: RwLock<Arc<dyn ScopeProvider>>,
}

impl TagLoggerProvider {
    /// Create a provider with no filter: everything except
    /// [`Severity::Off`](crate::Severity::Off) is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyTag`] if `tag` is empty.
    pub fn new(tag: impl Into<String>, sink: Arc<dyn LogSink>) -> Result<Self, LoggerError> {
        Self::build(tag.into(), sink, Arc::new(AcceptAllFilter))
    }

    /// Create a provider whose loggers all share the given filter.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyTag`] if `tag` is empty.
    pub fn with_filter(
        tag: impl Into<String>,
        sink: Arc<dyn LogSink>,
        filter: Arc<dyn Filter>,
    ) -> Result<Self, LoggerError> {
        Self::build(tag.into(), sink, filter)
    }

    fn build(
        tag: String,
        sink: Arc<dyn LogSink>,
        filter: Arc<dyn Filter>,
    ) -> Result<Self, LoggerError> {
        if tag.is_empty() {
            return Err(LoggerError::EmptyTag);
        }
        Ok(Self {
            tag,
            filter,
            sink,
            loggers: DashMap::new(),
            scope_provider: RwLock::new(Arc::new(NoopScopeProvider)),
        })
    }

    /// Returns the sink tag shared by every logger this provider creates.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the number of distinct categories created so far.
    pub fn logger_count(&self) -> usize {
        self.loggers.len()
    }

    /// Returns the logger for `name`, creating it on first request.
    ///
    /// Repeated calls with the same name return the same instance.
    /// Concurrent first requests for an unseen name resolve to a single
    /// winning instance shared by all callers.
    pub fn create_logger(&self, name: &str) -> Arc<TagLogger> {
        if let Some(logger) = self.loggers.get(name) {
            return Arc::clone(logger.value());
        }

        let scope_provider = self
            .scope_provider
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let logger = self.loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(TagLogger::assemble(
                self.tag.clone(),
                name.to_string(),
                Arc::clone(&self.sink),
                Arc::clone(&*scope_provider),
                Arc::clone(&self.filter),
            ))
        });
        Arc::clone(logger.value())
    }

    /// Replace the scope provider and push the new reference into every
    /// cached logger.
    ///
    /// Loggers created after this call pick the new provider up at
    /// construction. Scopes already acquired from the previous provider are
    /// unaffected.
    pub fn set_scope_provider(&self, provider: Arc<dyn ScopeProvider>) {
        let mut current = self
            .scope_provider
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Arc::clone(&provider);
        for logger in self.loggers.iter() {
            logger.value().set_scope_provider(Arc::clone(&provider));
        }
    }
}

impl fmt::Debug for TagLoggerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLoggerProvider")
            .field("tag", &self.tag)
            .field("logger_count", &self.logger_count())
            .finish()
    }
}
