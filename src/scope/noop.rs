//! No-operation scope provider implementation.

use super::{Scope, ScopeProvider};
use std::fmt;

/// A scope provider that discards all pushed state.
///
/// Used as the default when no real scope source has been wired in, so
/// `begin_scope` always returns a usable handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScopeProvider;

impl ScopeProvider for NoopScopeProvider {
    #[inline]
    fn push(&self, _state: &dyn fmt::Display) -> Scope {
        Scope::noop()
    }
}
