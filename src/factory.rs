//! Provider factory for host wiring.
//!
//! This module is the registration surface: hosts describe the provider
//! they want with a [`ProviderConfig`] and let the [`ProviderFactory`],
//! which holds the sink, manufacture it. Three configuration shapes are
//! supported:
//!
//! - [`ProviderConfig::tag`] - tag only; Information and above
//! - [`ProviderConfig::min_severity`] - tag plus a severity threshold
//! - [`ProviderConfig::filtered`] - tag plus an explicit filter

use crate::error::LoggerError;
use crate::filter::{Filter, MinSeverityFilter};
use crate::provider::TagLoggerProvider;
use crate::severity::Severity;
use crate::sink::LogSink;
use std::fmt;
use std::sync::Arc;

/// Configuration for creating a logger provider.
///
/// # Example
///
/// ```
/// use tagsink::{ProviderConfig, Severity};
///
/// // Tag only: Information and above.
/// let app = ProviderConfig::tag("App");
///
/// // Tag plus minimum severity.
/// let quiet = ProviderConfig::min_severity("App", Severity::Warning);
///
/// assert_eq!(app.tag_name(), "App");
/// assert_eq!(quiet.tag_name(), "App");
/// ```
#[derive(Clone)]
pub enum ProviderConfig {
    /// Tag only. Defaults to emitting Information and above.
    Tag {
        /// Tag the sink files records under
        tag: String,
    },

    /// Tag plus a minimum severity threshold: a record is emitted when its
    /// severity is at or above `min`.
    MinSeverity {
        /// Tag the sink files records under
        tag: String,
        /// Minimum severity to emit
        min: Severity,
    },

    /// Tag plus an explicit filter predicate.
    Filtered {
        /// Tag the sink files records under
        tag: String,
        /// Filter shared by every category
        filter: Arc<dyn Filter>,
    },
}

impl ProviderConfig {
    /// Create a tag-only configuration (Information and above).
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag { tag: tag.into() }
    }

    /// Create a configuration with a minimum severity threshold.
    pub fn min_severity(tag: impl Into<String>, min: Severity) -> Self {
        Self::MinSeverity {
            tag: tag.into(),
            min,
        }
    }

    /// Create a configuration with an explicit filter.
    pub fn filtered(tag: impl Into<String>, filter: Arc<dyn Filter>) -> Self {
        Self::Filtered {
            tag: tag.into(),
            filter,
        }
    }

    /// Returns the tag this configuration registers under.
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Tag { tag } => tag,
            Self::MinSeverity { tag, .. } => tag,
            Self::Filtered { tag, .. } => tag,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag { tag } => f.debug_struct("Tag").field("tag", tag).finish(),
            Self::MinSeverity { tag, min } => f
                .debug_struct("MinSeverity")
                .field("tag", tag)
                .field("min", min)
                .finish(),
            Self::Filtered { tag, .. } => f
                .debug_struct("Filtered")
                .field("tag", tag)
                .finish_non_exhaustive(),
        }
    }
}

/// Factory for creating [`TagLoggerProvider`] instances.
///
/// Holds the sink so host wiring can manufacture providers from
/// configuration alone.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagsink::{MemorySink, ProviderConfig, ProviderFactory, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// let factory = ProviderFactory::new(sink);
///
/// let provider = factory
///     .create(ProviderConfig::min_severity("App", Severity::Warning))
///     .expect("tag is non-empty");
/// assert_eq!(provider.tag(), "App");
/// ```
pub struct ProviderFactory {
    sink: Arc<dyn LogSink>,
}

impl ProviderFactory {
    /// Create a factory that wires the given sink into every provider.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Create a provider from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::EmptyTag`] if the configured tag is empty.
    pub fn create(&self, config: ProviderConfig) -> Result<TagLoggerProvider, LoggerError> {
        match config {
            ProviderConfig::Tag { tag } => TagLoggerProvider::with_filter(
                tag,
                Arc::clone(&self.sink),
                Arc::new(MinSeverityFilter::new(Severity::Information)),
            ),
            ProviderConfig::MinSeverity { tag, min } => TagLoggerProvider::with_filter(
                tag,
                Arc::clone(&self.sink),
                Arc::new(MinSeverityFilter::new(min)),
            ),
            ProviderConfig::Filtered { tag, filter } => {
                TagLoggerProvider::with_filter(tag, Arc::clone(&self.sink), filter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FnFilter;
    use crate::sink::MemorySink;

    fn factory() -> (Arc<MemorySink>, ProviderFactory) {
        let sink = Arc::new(MemorySink::new());
        let factory = ProviderFactory::new(sink.clone());
        (sink, factory)
    }

    #[test]
    fn test_tag_only_defaults_to_information() {
        let (_sink, factory) = factory();
        let provider = factory
            .create(ProviderConfig::tag("App"))
            .expect("tag is non-empty");
        let logger = provider.create_logger("Net");

        assert!(!logger.enabled(Severity::Debug));
        assert!(logger.enabled(Severity::Information));
        assert!(logger.enabled(Severity::Critical));
    }

    #[test]
    fn test_min_severity_shape() {
        let (_sink, factory) = factory();
        let provider = factory
            .create(ProviderConfig::min_severity("App", Severity::Error))
            .expect("tag is non-empty");
        let logger = provider.create_logger("Net");

        assert!(!logger.enabled(Severity::Warning));
        assert!(logger.enabled(Severity::Error));
    }

    #[test]
    fn test_filtered_shape() {
        let (_sink, factory) = factory();
        let filter: Arc<dyn Filter> =
            Arc::new(FnFilter::new(|category: &str, _| category == "Net"));
        let provider = factory
            .create(ProviderConfig::filtered("App", filter))
            .expect("tag is non-empty");

        assert!(provider.create_logger("Net").enabled(Severity::Trace));
        assert!(!provider.create_logger("Ui").enabled(Severity::Critical));
    }

    #[test]
    fn test_empty_tag_rejected_through_every_shape() {
        let (_sink, factory) = factory();
        assert!(factory.create(ProviderConfig::tag("")).is_err());
        assert!(factory
            .create(ProviderConfig::min_severity("", Severity::Warning))
            .is_err());
        assert!(factory
            .create(ProviderConfig::filtered(
                "",
                Arc::new(crate::filter::AcceptAllFilter)
            ))
            .is_err());
    }

    #[test]
    fn test_tag_name_accessor() {
        assert_eq!(ProviderConfig::tag("App").tag_name(), "App");
        assert_eq!(
            ProviderConfig::min_severity("Svc", Severity::Debug).tag_name(),
            "Svc"
        );
        assert_eq!(
            ProviderConfig::filtered("Net", Arc::new(crate::filter::AcceptAllFilter)).tag_name(),
            "Net"
        );
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = ProviderConfig::min_severity("App", Severity::Warning);
        let cloned = config.clone();
        assert_eq!(config.tag_name(), cloned.tag_name());

        let debug = format!("{:?}", config);
        assert!(debug.contains("App"));
        assert!(debug.contains("Warning"));
    }

    #[test]
    fn test_providers_share_the_factory_sink() {
        let (sink, factory) = factory();
        let provider = factory
            .create(ProviderConfig::tag("App"))
            .expect("tag is non-empty");
        provider.create_logger("Net").log(
            Severity::Information,
            Default::default(),
            "started",
            None,
            |state: &str, _| state.to_string(),
        );
        assert_eq!(sink.len(), 1);
    }
}
