//! Error types for logger and provider construction.

use thiserror::Error;

/// Errors that can occur when constructing loggers or providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// The sink tag was empty. Every record is filed under the tag, so an
    /// empty one is a programmer error rather than a recoverable condition.
    #[error("logger tag must not be empty")]
    EmptyTag,
}
