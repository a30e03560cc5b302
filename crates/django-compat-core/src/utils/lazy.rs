//! Deferred string primitive.
//!
//! [`LazyUrl`] defers producing a URL string until it is first forced,
//! similar to Django's `reverse_lazy` result. The value is computed once
//! and then cached; forcing again returns the cached string.

use std::sync::{Arc, OnceLock};

use crate::error::CompatResult;

/// A lazily-produced URL string.
///
/// The thunk is called at most once on success; a successful result is
/// cached and every later [`force`](LazyUrl::force) returns the same
/// string. If the thunk fails the error is returned and nothing is
/// cached, so a later force re-evaluates the thunk.
///
/// `LazyUrl` is cheap to clone; clones share the same cache, so forcing
/// any clone forces them all.
///
/// # Examples
///
/// ```
/// use django_compat_core::utils::LazyUrl;
///
/// let lazy = LazyUrl::new(|| Ok("/accounts/logout/".to_string()));
/// assert!(!lazy.is_forced());
/// assert_eq!(lazy.force().unwrap(), "/accounts/logout/");
/// assert!(lazy.is_forced());
/// ```
#[derive(Clone)]
pub struct LazyUrl {
    thunk: Arc<dyn Fn() -> CompatResult<String> + Send + Sync>,
    cache: Arc<OnceLock<String>>,
}

impl std::fmt::Debug for LazyUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cache.get() {
            Some(value) => f.debug_tuple("LazyUrl").field(value).finish(),
            None => f.debug_tuple("LazyUrl").field(&"<unforced>").finish(),
        }
    }
}

impl LazyUrl {
    /// Creates a new `LazyUrl` with the given thunk.
    ///
    /// The thunk is not called until the value is first forced.
    pub fn new(thunk: impl Fn() -> CompatResult<String> + Send + Sync + 'static) -> Self {
        Self {
            thunk: Arc::new(thunk),
            cache: Arc::new(OnceLock::new()),
        }
    }

    /// Creates a `LazyUrl` that is already forced to a fixed string.
    pub fn fixed(value: impl Into<String>) -> Self {
        let cache = Arc::new(OnceLock::new());
        let _ = cache.set(value.into());
        Self {
            thunk: Arc::new(|| -> CompatResult<String> {
                unreachable!("fixed LazyUrl is always cached")
            }),
            cache,
        }
    }

    /// Forces the value, calling the thunk if it has not yet succeeded.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the thunk returns. Errors are not cached.
    pub fn force(&self) -> CompatResult<String> {
        if let Some(value) = self.cache.get() {
            return Ok(value.clone());
        }
        let value = (self.thunk)()?;
        Ok(self.cache.get_or_init(|| value).clone())
    }

    /// Returns `true` if the value has been successfully forced.
    pub fn is_forced(&self) -> bool {
        self.cache.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompatError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_force_computes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let count = calls.clone();

        let lazy = LazyUrl::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok("/something/".to_string())
        });

        assert!(!lazy.is_forced());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(lazy.force().unwrap(), "/something/");
        assert_eq!(lazy.force().unwrap(), "/something/");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let count = calls.clone();

        let lazy = LazyUrl::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok("/shared/".to_string())
        });
        let clone = lazy.clone();

        assert_eq!(lazy.force().unwrap(), "/shared/");
        assert!(clone.is_forced());
        assert_eq!(clone.force().unwrap(), "/shared/");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let count = calls.clone();

        let lazy = LazyUrl::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Err(CompatError::NoReverseMatch("missing".into()))
        });

        assert!(lazy.force().is_err());
        assert!(lazy.force().is_err());
        assert!(!lazy.is_forced());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fixed() {
        let lazy = LazyUrl::fixed("/home/");
        assert!(lazy.is_forced());
        assert_eq!(lazy.force().unwrap(), "/home/");
    }

    #[test]
    fn test_debug_unforced() {
        let lazy = LazyUrl::new(|| Ok("x".to_string()));
        assert!(format!("{lazy:?}").contains("unforced"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LazyUrl>();
    }
}
