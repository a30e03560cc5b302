//! # django-compat-urls
//!
//! URL destination resolution for the django-compat crates: the
//! [`resolve_url`] shim that turns a heterogeneous destination value (path,
//! URL, view name, view handle, self-locating object, or lazy string) into
//! a URL string, plus the [`reverse`](routes::reverse) /
//! [`reverse_lazy`](routes::reverse_lazy) helpers it builds on.
//!
//! ## Modules
//!
//! - [`routes`] - The [`ReverseUrls`] collaborator trait and [`RouteTable`]
//! - [`target`] - The [`UrlTarget`] sum type and [`AbsoluteUrl`] capability
//! - [`resolve`] - The [`resolve_url`] resolution algorithm

pub mod resolve;
pub mod routes;
pub mod target;

// Re-export the most commonly used items at the crate root.
pub use resolve::{resolve_target, resolve_url};
pub use routes::{reverse, reverse_lazy, ReverseUrls, RouteTable, ViewHandle};
pub use target::{AbsoluteUrl, UrlTarget};
