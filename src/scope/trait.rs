//! Scope provider trait and handle definitions.

use std::fmt;

/// Source of logging scope context.
///
/// Implementations maintain a logical stack of contextual state; `push`
/// places state on that stack and returns a [`Scope`] handle that pops it
/// when released. Implementations must be `Send + Sync`; one provider
/// instance is shared by every logger a [`TagLoggerProvider`] creates.
///
/// [`TagLoggerProvider`]: crate::TagLoggerProvider
pub trait ScopeProvider: Send + Sync {
    /// Push contextual state, returning a handle that releases it.
    fn push(&self, state: &dyn fmt::Display) -> Scope;
}

/// Handle to a pushed logging scope.
///
/// Releases the scope exactly once, either explicitly via [`release`] or
/// implicitly when dropped. Handles produced by [`Scope::noop`] release
/// nothing, so callers can treat every handle uniformly regardless of
/// whether a real scope provider is attached.
///
/// [`release`]: Scope::release
///
/// # Example
///
/// ```
/// use tagsink::Scope;
///
/// {
///     let _scope = Scope::noop();
///     // records emitted here carry the scope (with a capable provider)
/// } // released on drop
/// ```
pub struct Scope {
    release: Option<Box<dyn FnOnce()>>,
}

impl Scope {
    /// Create a scope that runs `release` when it ends.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Create a scope whose release is a no-op.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the scope now instead of waiting for drop.
    pub fn release(self) {
        // Drop runs the release closure.
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("noop", &self.release.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_scope_releases_on_drop() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        {
            let _scope = Scope::new(move || flag.set(true));
            assert!(!released.get(), "Scope must not release while alive");
        }
        assert!(released.get(), "Scope must release on drop");
    }

    #[test]
    fn test_scope_explicit_release() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        let scope = Scope::new(move || flag.set(true));
        scope.release();
        assert!(released.get());
    }

    #[test]
    fn test_scope_releases_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let scope = Scope::new(move || counter.set(counter.get() + 1));
        scope.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_noop_scope_drop_is_noop() {
        let scope = Scope::noop();
        drop(scope);
    }

    #[test]
    fn test_scope_debug_impl() {
        let scope = Scope::noop();
        assert_eq!(format!("{:?}", scope), "Scope { noop: true }");
        let scope = Scope::new(|| {});
        assert_eq!(format!("{:?}", scope), "Scope { noop: false }");
    }
}
