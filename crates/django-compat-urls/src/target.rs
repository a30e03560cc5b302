//! Destination values accepted by the URL resolver.
//!
//! [`UrlTarget`] is the tagged union of everything `resolve_url` accepts:
//! literal paths, full URLs, view names, view handles, self-locating
//! objects, and lazily-deferred strings. Classification happens once, at
//! construction; the resolver only matches on the variant.

use std::sync::Arc;

use django_compat_core::{CompatError, CompatResult, LazyUrl};

use crate::routes::ViewHandle;

/// The ability of an object to report its own canonical URL.
///
/// This is the explicit-trait rendering of Django's `get_absolute_url`
/// duck-typing: a model (or any other object) that knows where it lives
/// implements this trait and can be passed to `resolve_url` directly.
///
/// # Examples
///
/// ```
/// use django_compat_urls::target::AbsoluteUrl;
///
/// struct Article { slug: String }
///
/// impl AbsoluteUrl for Article {
///     fn get_absolute_url(&self) -> String {
///         format!("/articles/{}/", self.slug)
///     }
/// }
/// ```
pub trait AbsoluteUrl: Send + Sync {
    /// Returns this object's canonical URL.
    ///
    /// The resolver returns this value verbatim, without validating its
    /// shape.
    fn get_absolute_url(&self) -> String;
}

/// A destination value, classified once at construction.
///
/// Text classification is order-dependent and mutually exclusive: a leading
/// `/`, `./`, or `../` makes a [`Path`](UrlTarget::Path); otherwise a
/// `://` anywhere makes a [`Url`](UrlTarget::Url); any remaining text is a
/// [`Name`](UrlTarget::Name) candidate. Whether a `Name` is a registered
/// view name or an opaque token (a bare domain, a slug) can only be decided
/// against the route table, so that call is the resolver's.
#[derive(Clone)]
pub enum UrlTarget {
    /// A literal URL path, returned unchanged by the resolver.
    Path(String),
    /// A full URL with a scheme, returned unchanged by the resolver.
    Url(String),
    /// A view-name candidate: reversed if registered, passed through
    /// unchanged otherwise.
    Name(String),
    /// A view callable handle; must reverse, never passes through.
    View(ViewHandle),
    /// An object that reports its own canonical URL.
    Object(Arc<dyn AbsoluteUrl>),
    /// A deferred string, forced and re-classified by the resolver.
    Lazy(LazyUrl),
}

impl std::fmt::Debug for UrlTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(s) => f.debug_tuple("Path").field(s).finish(),
            Self::Url(s) => f.debug_tuple("Url").field(s).finish(),
            Self::Name(s) => f.debug_tuple("Name").field(s).finish(),
            Self::View(v) => f.debug_tuple("View").field(v).finish(),
            Self::Object(_) => f.debug_tuple("Object").field(&"<dyn AbsoluteUrl>").finish(),
            Self::Lazy(l) => f.debug_tuple("Lazy").field(l).finish(),
        }
    }
}

impl UrlTarget {
    /// Classifies a piece of text. First matching rule wins.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with('/') || text.starts_with("./") || text.starts_with("../") {
            Self::Path(text)
        } else if text.contains("://") {
            Self::Url(text)
        } else {
            Self::Name(text)
        }
    }

    /// Wraps a self-locating object.
    pub fn object(object: impl AbsoluteUrl + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Classifies a destination read from dynamic configuration.
    ///
    /// Strings classify exactly like [`text`](Self::text); every other JSON
    /// shape is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CompatError::UnsupportedReference`] for numbers, booleans,
    /// null, arrays, and objects.
    pub fn from_json(value: &serde_json::Value) -> CompatResult<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Self::text(s.clone())),
            other => Err(CompatError::UnsupportedReference(other.to_string())),
        }
    }
}

impl From<&str> for UrlTarget {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for UrlTarget {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<ViewHandle> for UrlTarget {
    fn from(view: ViewHandle) -> Self {
        Self::View(view)
    }
}

impl From<LazyUrl> for UrlTarget {
    fn from(lazy: LazyUrl) -> Self {
        Self::Lazy(lazy)
    }
}

impl From<Arc<dyn AbsoluteUrl>> for UrlTarget {
    fn from(object: Arc<dyn AbsoluteUrl>) -> Self {
        Self::Object(object)
    }
}
