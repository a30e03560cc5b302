//! # django-compat-core
//!
//! Core types for the django-compat crates: error types, settings, logging,
//! and the deferred-string primitive used by lazy URL reversal. This crate
//! has zero intra-workspace dependencies and provides the foundation for the
//! URL-resolution and manager-accessor shims.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`utils`] - Utility primitives ([`LazyUrl`](utils::LazyUrl))
//! - [`settings`] - Settings and global configuration
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{CompatError, CompatResult};
pub use settings::{LazySettings, Settings, SETTINGS};
pub use utils::LazyUrl;
