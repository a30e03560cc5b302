//! Core error types for the django-compat crates.
//!
//! This module provides the [`CompatError`] enum covering URL reversal
//! failures, unsupported destination values, accessor override conflicts,
//! and configuration errors. It mirrors the small exception surface of the
//! original compatibility layer (`NoReverseMatch` and friends).

use thiserror::Error;

/// The primary error type for the django-compat crates.
///
/// Each variant corresponds to one classified failure mode; no variant is
/// ever retried and no partial results accompany an error.
#[derive(Error, Debug)]
pub enum CompatError {
    /// A view name or view callable could not be reversed to a URL path.
    ///
    /// For plain strings the resolver downgrades this to a pass-through
    /// (see `django-compat-urls`); for callables it always propagates.
    #[error("Reverse for '{0}' not found")]
    NoReverseMatch(String),

    /// A dynamic destination value matched none of the recognized shapes
    /// (not text, not a view handle, not a self-locating object).
    #[error("Unsupported URL reference: {0}")]
    UnsupportedReference(String),

    /// One lineage level independently overrides both `get_query_set` and
    /// `get_queryset` with different bodies. The shim refuses to guess
    /// which one the author meant.
    #[error("'{definer}' overrides both get_query_set and get_queryset with different implementations")]
    AmbiguousOverride {
        /// The name of the type that defined the conflicting overrides.
        definer: String,
    },

    /// A configuration value is missing or malformed.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),
}

/// A convenience type alias for `Result<T, CompatError>`.
pub type CompatResult<T> = Result<T, CompatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reverse_match_display() {
        let err = CompatError::NoReverseMatch("logout".into());
        assert_eq!(err.to_string(), "Reverse for 'logout' not found");
    }

    #[test]
    fn test_unsupported_reference_display() {
        let err = CompatError::UnsupportedReference("42".into());
        assert_eq!(err.to_string(), "Unsupported URL reference: 42");
    }

    #[test]
    fn test_ambiguous_override_display() {
        let err = CompatError::AmbiguousOverride {
            definer: "RoomManager".into(),
        };
        assert!(err.to_string().contains("RoomManager"));
        assert!(err.to_string().contains("get_query_set"));
        assert!(err.to_string().contains("get_queryset"));
    }

    #[test]
    fn test_improperly_configured_display() {
        let err = CompatError::ImproperlyConfigured("bad toml".into());
        assert_eq!(err.to_string(), "Improperly configured: bad toml");
    }
}
