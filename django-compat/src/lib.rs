//! # django-compat
//!
//! Forward- and backward-compatibility shims for Django-style Rust web
//! stacks: a destination resolver that behaves identically across
//! host-framework versions, and a manager shim that keeps both queryset
//! accessor spellings reaching one behavior.
//!
//! This is the meta-crate that re-exports the member crates for convenient
//! access. Depend on `django-compat` for everything, or on the individual
//! crates for finer-grained control.

/// Core types: errors, settings, logging, and the lazy-string primitive.
pub use django_compat_core as core;

/// URL destination resolution: `resolve_url`, `reverse`, `reverse_lazy`.
pub use django_compat_urls as urls;

/// Manager accessor compatibility: `get_query_set` / `get_queryset`.
pub use django_compat_managers as managers;

// The two shims this workspace exists for, at the crate root.
pub use django_compat_managers::{pick_accessor, CompatManager};
pub use django_compat_urls::resolve_url;
