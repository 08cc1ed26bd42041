//! Category filters.
//!
//! A filter decides whether a record at a given severity should be emitted
//! for a given category. "No filter configured" is modeled as the
//! [`AcceptAllFilter`] null object rather than an `Option`, which keeps the
//! emit path free of null-checks.

use crate::severity::Severity;

/// Decides whether a category emits records at a severity.
///
/// Implementations must be `Send + Sync`; a single filter instance is shared
/// by every logger a provider creates. The filter is consulted only for real
/// severities; [`Severity::Off`] is rejected before the filter is reached.
pub trait Filter: Send + Sync {
    /// Returns true if records for `category` at `severity` should be emitted.
    fn is_enabled(&self, category: &str, severity: Severity) -> bool;
}

/// Filter that accepts every record.
///
/// Used as the default when no filter is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllFilter;

impl Filter for AcceptAllFilter {
    #[inline]
    fn is_enabled(&self, _category: &str, _severity: Severity) -> bool {
        true
    }
}

/// Filter that accepts records at or above a minimum severity.
#[derive(Debug, Clone, Copy)]
pub struct MinSeverityFilter {
    min: Severity,
}

impl MinSeverityFilter {
    /// Create a filter with the given minimum severity.
    pub fn new(min: Severity) -> Self {
        Self { min }
    }

    /// Returns the configured minimum severity.
    pub fn min(&self) -> Severity {
        self.min
    }
}

impl Filter for MinSeverityFilter {
    #[inline]
    fn is_enabled(&self, _category: &str, severity: Severity) -> bool {
        severity >= self.min
    }
}

/// Adapter that turns a plain predicate into a [`Filter`].
///
/// Lets hosts pass bare closures where a filter is expected:
///
/// ```
/// use tagsink::{Filter, FnFilter, Severity};
///
/// let only_net_errors = FnFilter::new(|category: &str, severity| {
///     category == "Net" && severity >= Severity::Error
/// });
/// assert!(only_net_errors.is_enabled("Net", Severity::Error));
/// assert!(!only_net_errors.is_enabled("Ui", Severity::Error));
/// ```
#[derive(Debug, Clone)]
pub struct FnFilter<F> {
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&str, Severity) -> bool + Send + Sync,
{
    /// Wrap the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&str, Severity) -> bool + Send + Sync,
{
    #[inline]
    fn is_enabled(&self, category: &str, severity: Severity) -> bool {
        (self.predicate)(category, severity)
    }
}
