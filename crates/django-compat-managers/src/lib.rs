//! # django-compat-managers
//!
//! Manager accessor compatibility for the django-compat crates. The
//! queryset accessor has been spelled both `get_query_set` (old) and
//! `get_queryset` (new) across host-framework versions; this crate resolves
//! a manager type's override lineage down to one implementation and exposes
//! both spellings as interchangeable facades over it.
//!
//! ## Modules
//!
//! - [`accessor`] - [`Accessor`], [`AccessorLevel`], and [`pick_accessor`]
//! - [`manager`] - [`CompatManager`], which resolves once at construction

pub mod accessor;
pub mod manager;

// Re-export the most commonly used items at the crate root.
pub use accessor::{pick_accessor, Accessor, AccessorLevel};
pub use manager::CompatManager;
