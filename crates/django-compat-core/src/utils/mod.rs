//! Utility primitives shared by the django-compat crates.

pub mod lazy;

pub use lazy::LazyUrl;
