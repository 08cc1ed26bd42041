//! tagsink - Category logging adapter for tag-based log sinks
//!
//! This library bridges a structured logging front end (severities, named
//! categories, scopes, formatted messages with optional attached errors) to
//! a platform-style sink that accepts a tag, a severity tier, and a message
//! string.
//!
//! # High-Level API
//!
//! Host wiring goes through the [`factory`] module: describe the provider
//! with a [`ProviderConfig`], let the [`ProviderFactory`] build it, then
//! hand out per-category loggers:
//!
//! ```
//! use std::sync::Arc;
//! use tagsink::{EventId, MemorySink, ProviderConfig, ProviderFactory, Severity, SinkLevel};
//!
//! let sink = Arc::new(MemorySink::new());
//! let factory = ProviderFactory::new(sink.clone());
//! let provider = factory.create(ProviderConfig::tag("App")).expect("tag is non-empty");
//!
//! let logger = provider.create_logger("Net");
//! logger.log(Severity::Information, EventId::default(), "started", None, |state: &str, _| {
//!     state.to_string()
//! });
//!
//! let records = sink.records();
//! assert_eq!(records[0].level, SinkLevel::Info);
//! assert_eq!(records[0].tag, "App");
//! assert_eq!(records[0].message, "started");
//! ```
//!
//! In production the [`MemorySink`] above would be a real platform sink:
//! [`TracingSink`] forwards records into the `tracing` ecosystem, and hosts
//! with their own write target implement [`LogSink`] directly.

pub mod error;
pub mod factory;
pub mod filter;
pub mod logger;
pub mod provider;
pub mod scope;
pub mod severity;
pub mod sink;

pub use error::LoggerError;
pub use factory::{ProviderConfig, ProviderFactory};
pub use filter::{AcceptAllFilter, Filter, FnFilter, MinSeverityFilter};
pub use logger::{EventId, TagLogger, FALLBACK_LOGGER_NAME};
pub use provider::TagLoggerProvider;
pub use scope::{NoopScopeProvider, Scope, ScopeProvider};
pub use severity::Severity;
pub use sink::{LogSink, MemorySink, NoopSink, SinkLevel, SinkRecord, TracingSink};

/// Version of the tagsink library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }

    #[test]
    fn test_root_reexports_are_usable() {
        let _severity = Severity::Information;
        let _filter = AcceptAllFilter;
        let _sink = NoopSink;
        let _scope_provider = NoopScopeProvider;
    }
}
