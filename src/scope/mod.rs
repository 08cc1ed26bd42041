//! Logging scopes.
//!
//! A scope attaches caller-defined contextual state to all records emitted
//! for the duration of an operation. This module provides:
//!
//! - `ScopeProvider` trait: the source of scope context, consumed by loggers
//! - `Scope`: an RAII handle that releases the pushed state deterministically
//! - `NoopScopeProvider`: silent provider used when no scope source is wired
//!
//! Whether scope state actually reaches the sink is up to the configured
//! provider; the loggers only delegate.

mod noop;
mod r#trait;

pub use noop::NoopScopeProvider;
pub use r#trait::{Scope, ScopeProvider};
