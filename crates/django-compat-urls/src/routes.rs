//! Reverse URL resolution against a named route table.
//!
//! This module provides the [`ReverseUrls`] collaborator trait, the
//! in-memory [`RouteTable`] implementation, and the [`reverse`] /
//! [`reverse_lazy`] functions, mirroring Django's `django.urls.reverse()`
//! and `reverse_lazy()`.
//!
//! Route *matching* (dispatching an incoming request to a view) is not this
//! crate's concern; the table only answers "what path does this name or
//! view map to".

use std::sync::Arc;

use django_compat_core::{CompatError, CompatResult, LazyUrl};

/// An opaque, identity-compared handle to a registered view callable.
///
/// The handle stands in for the view function itself: two handles are equal
/// only if they are clones of the same original, never because their labels
/// match. The label exists purely for error messages and debugging.
///
/// # Examples
///
/// ```
/// use django_compat_urls::routes::ViewHandle;
///
/// let logout = ViewHandle::new("auth.views.logout");
/// let clone = logout.clone();
/// assert_eq!(logout, clone);
/// assert_ne!(logout, ViewHandle::new("auth.views.logout"));
/// ```
#[derive(Clone)]
pub struct ViewHandle {
    inner: Arc<str>,
}

impl ViewHandle {
    /// Creates a new handle with the given debug label.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self {
            inner: Arc::from(label.as_ref()),
        }
    }

    /// Returns the debug label this handle was created with.
    pub fn label(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for ViewHandle {
    /// Allocation identity, not label equality.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ViewHandle {}

impl std::fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ViewHandle").field(&self.label()).finish()
    }
}

/// The reversal service the resolver consults.
///
/// Implementations own the route table; the resolver never inspects routes
/// directly. Both operations fail with [`CompatError::NoReverseMatch`] on a
/// miss.
pub trait ReverseUrls: Send + Sync {
    /// Returns the URL path registered under `viewname`.
    fn reverse(&self, viewname: &str) -> CompatResult<String>;

    /// Returns the view name the given handle was registered under.
    fn view_name(&self, view: &ViewHandle) -> CompatResult<String>;
}

#[derive(Debug, Clone)]
struct Route {
    name: String,
    path: String,
    view: Option<ViewHandle>,
}

/// An in-memory route table mapping view names (and optionally view
/// handles) to URL paths.
///
/// Lookup is by exact name, first registration wins. Reversed paths are
/// normalized to start with `/`.
///
/// # Examples
///
/// ```
/// use django_compat_urls::routes::{ReverseUrls, RouteTable};
///
/// let mut urls = RouteTable::new();
/// urls.route("logout", "/accounts/logout/");
/// assert_eq!(urls.reverse("logout").unwrap(), "/accounts/logout/");
/// assert!(urls.reverse("signup").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates a new, empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named route.
    pub fn route(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.push(Route {
            name: name.into(),
            path: path.into(),
            view: None,
        });
    }

    /// Registers a named route backed by a view handle.
    ///
    /// The handle becomes reversible through [`ReverseUrls::view_name`].
    pub fn route_view(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        view: ViewHandle,
    ) {
        self.routes.push(Route {
            name: name.into(),
            path: path.into(),
            view: Some(view),
        });
    }
}

impl ReverseUrls for RouteTable {
    fn reverse(&self, viewname: &str) -> CompatResult<String> {
        for route in &self.routes {
            if route.name == viewname {
                // Ensure the path starts with /
                let path = if route.path.starts_with('/') {
                    route.path.clone()
                } else {
                    format!("/{}", route.path)
                };
                return Ok(path);
            }
        }
        Err(CompatError::NoReverseMatch(viewname.to_string()))
    }

    fn view_name(&self, view: &ViewHandle) -> CompatResult<String> {
        for route in &self.routes {
            if route.view.as_ref() == Some(view) {
                return Ok(route.name.clone());
            }
        }
        Err(CompatError::NoReverseMatch(view.label().to_string()))
    }
}

/// Generates a URL for a named view.
///
/// Thin wrapper over [`ReverseUrls::reverse`], provided for call sites that
/// prefer Django's free-function spelling.
///
/// # Errors
///
/// Returns [`CompatError::NoReverseMatch`] if no route is registered under
/// `viewname`.
pub fn reverse(urls: &dyn ReverseUrls, viewname: &str) -> CompatResult<String> {
    urls.reverse(viewname)
}

/// Returns a [`LazyUrl`] that reverses `viewname` when first forced.
///
/// The table is captured by the returned value, so reversal sees the table
/// as it exists at force time, not at creation time. Mirrors Django's
/// `reverse_lazy()`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use django_compat_urls::routes::{reverse_lazy, ReverseUrls, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.route("logout", "/accounts/logout/");
/// let urls: Arc<dyn ReverseUrls> = Arc::new(table);
///
/// let lazy = reverse_lazy(&urls, "logout");
/// assert_eq!(lazy.force().unwrap(), "/accounts/logout/");
/// ```
pub fn reverse_lazy(urls: &Arc<dyn ReverseUrls>, viewname: &str) -> LazyUrl {
    let urls = Arc::clone(urls);
    let viewname = viewname.to_string();
    LazyUrl::new(move || urls.reverse(&viewname))
}
