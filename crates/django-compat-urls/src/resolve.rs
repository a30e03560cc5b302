//! Destination resolution.
//!
//! [`resolve_url`] turns anything that identifies a destination into a URL
//! string, mirroring Django's `django.shortcuts.resolve_url()`. The input
//! is classified once (see [`UrlTarget`]) and each variant has exactly one
//! resolution rule.

use django_compat_core::{CompatError, CompatResult};

use crate::routes::ReverseUrls;
use crate::target::UrlTarget;

/// Resolves a destination to a URL string.
///
/// Accepts anything convertible into a [`UrlTarget`]: string slices and
/// owned strings (classified by shape), [`ViewHandle`](crate::routes::ViewHandle)s,
/// [`LazyUrl`](django_compat_core::LazyUrl)s, and self-locating objects.
///
/// Resolution rules, in variant order:
///
/// - `Lazy` is forced, then the forced text is re-classified and resolved.
/// - `Object` returns `get_absolute_url()` verbatim, with no validation.
/// - `Path` and `Url` are returned unchanged.
/// - `Name` is reversed against the route table; if no route matches, the
///   original string is returned unchanged. A string that is not a path,
///   not a URL, and not a known view name is assumed to be an opaque token
///   (a bare domain, a slug) the caller wants passed through untouched.
/// - `View` is strict: the handle must reverse to a registered view, and
///   any failure propagates. An unresolvable callable is programmer error,
///   not an opaque token.
///
/// # Errors
///
/// Returns [`CompatError::NoReverseMatch`] when a view handle (or the name
/// it maps to) has no registered route, or when forcing a lazy value fails.
///
/// # Examples
///
/// ```
/// use django_compat_urls::{resolve_url, RouteTable};
///
/// let mut urls = RouteTable::new();
/// urls.route("logout", "/accounts/logout/");
///
/// assert_eq!(resolve_url(&urls, "/something/").unwrap(), "/something/");
/// assert_eq!(resolve_url(&urls, "logout").unwrap(), "/accounts/logout/");
/// assert_eq!(resolve_url(&urls, "example.com").unwrap(), "example.com");
/// ```
pub fn resolve_url(
    urls: &dyn ReverseUrls,
    to: impl Into<UrlTarget>,
) -> CompatResult<String> {
    resolve_target(urls, &to.into())
}

/// Resolves an already-classified [`UrlTarget`].
pub fn resolve_target(urls: &dyn ReverseUrls, target: &UrlTarget) -> CompatResult<String> {
    match target {
        UrlTarget::Lazy(lazy) => {
            let forced = lazy.force()?;
            tracing::debug!(value = %forced, "forced lazy destination");
            resolve_target(urls, &UrlTarget::text(forced))
        }
        UrlTarget::Object(object) => Ok(object.get_absolute_url()),
        UrlTarget::Path(text) | UrlTarget::Url(text) => Ok(text.clone()),
        UrlTarget::Name(name) => match urls.reverse(name) {
            Ok(path) => Ok(path),
            // Not a path, not a URL, not a known view name: pass the token
            // through unchanged instead of failing.
            Err(CompatError::NoReverseMatch(_)) => {
                tracing::debug!(token = %name, "no route matched, passing through as literal");
                Ok(name.clone())
            }
            Err(err) => Err(err),
        },
        UrlTarget::View(view) => {
            let name = urls.view_name(view)?;
            urls.reverse(&name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteTable, ViewHandle};
    use crate::target::AbsoluteUrl;
    use django_compat_core::LazyUrl;

    fn urls() -> RouteTable {
        let mut table = RouteTable::new();
        table.route("logout", "/accounts/logout/");
        table
    }

    #[test]
    fn test_url_path_unchanged() {
        assert_eq!(resolve_url(&urls(), "/something/").unwrap(), "/something/");
    }

    #[test]
    fn test_relative_paths_unchanged() {
        let urls = urls();
        for path in ["../", "../relative/", "./", "./relative/"] {
            assert_eq!(resolve_url(&urls, path).unwrap(), path);
        }
    }

    #[test]
    fn test_full_url_unchanged() {
        let url = "http://example.com/";
        assert_eq!(resolve_url(&urls(), url).unwrap(), url);
    }

    #[test]
    fn test_view_name_reversed() {
        assert_eq!(resolve_url(&urls(), "logout").unwrap(), "/accounts/logout/");
    }

    #[test]
    fn test_bare_domain_passes_through() {
        assert_eq!(resolve_url(&urls(), "example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_object_resolves_verbatim() {
        struct Importance(i64);
        impl AbsoluteUrl for Importance {
            fn get_absolute_url(&self) -> String {
                format!("/importance/{}/", self.0)
            }
        }
        let target = UrlTarget::object(Importance(1));
        assert_eq!(resolve_target(&urls(), &target).unwrap(), "/importance/1/");
    }

    #[test]
    fn test_object_output_is_not_validated() {
        struct Odd;
        impl AbsoluteUrl for Odd {
            fn get_absolute_url(&self) -> String {
                "not a url at all".to_string()
            }
        }
        let target = UrlTarget::object(Odd);
        assert_eq!(
            resolve_target(&urls(), &target).unwrap(),
            "not a url at all"
        );
    }

    #[test]
    fn test_unregistered_view_handle_propagates() {
        let stray = ViewHandle::new("not.a.view");
        let err = resolve_url(&urls(), stray).unwrap_err();
        assert!(matches!(err, CompatError::NoReverseMatch(_)));
    }

    #[test]
    fn test_registered_view_handle_reverses() {
        let logout = ViewHandle::new("auth.views.logout");
        let mut table = urls();
        table.route_view("logout-view", "/accounts/logout/", logout.clone());
        assert_eq!(
            resolve_url(&table, logout).unwrap(),
            "/accounts/logout/"
        );
    }

    #[test]
    fn test_lazy_matches_eager() {
        let table = urls();
        let lazy = LazyUrl::fixed("logout");
        let eager = resolve_url(&table, "logout").unwrap();
        assert_eq!(resolve_url(&table, lazy).unwrap(), eager);
    }

    #[test]
    fn test_lazy_force_error_propagates() {
        let lazy = LazyUrl::new(|| Err(CompatError::NoReverseMatch("gone".into())));
        let err = resolve_url(&urls(), lazy).unwrap_err();
        assert!(matches!(err, CompatError::NoReverseMatch(name) if name == "gone"));
    }
}
