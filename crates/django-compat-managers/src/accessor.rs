//! Override resolution for the two queryset-accessor spellings.
//!
//! A manager's queryset accessor has been spelled both `get_query_set`
//! (old) and `get_queryset` (new) across host-framework versions. Code
//! written against either spelling must reach the same behavior, including
//! any customization a manager subclass made under either name. This module
//! resolves a subclass-style lineage of optional overrides down to the
//! single implementation both public entry points should dispatch to.
//!
//! Resolution is performed once per type definition (see
//! [`CompatManager`](crate::manager::CompatManager)), never per call.

use std::sync::Arc;

use django_compat_core::{CompatError, CompatResult};

/// One implementation of a queryset accessor.
///
/// An `Accessor` pairs a body (a closure from manager state to a queryset
/// value) with the name of the type that defined it. Accessors are compared
/// by body identity: two accessors are the same implementation only if they
/// share the same allocation, never because their definers match.
///
/// Generic over the manager state `S` and the accessor result `Q`; query
/// execution is the caller's concern.
pub struct Accessor<S, Q> {
    definer: &'static str,
    body: Arc<dyn Fn(&S) -> Q + Send + Sync>,
}

impl<S, Q> Clone for Accessor<S, Q> {
    fn clone(&self) -> Self {
        Self {
            definer: self.definer,
            body: Arc::clone(&self.body),
        }
    }
}

impl<S, Q> std::fmt::Debug for Accessor<S, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessor")
            .field("definer", &self.definer)
            .finish_non_exhaustive()
    }
}

impl<S, Q> Accessor<S, Q> {
    /// Creates an accessor defined by the named type.
    pub fn new(definer: &'static str, body: impl Fn(&S) -> Q + Send + Sync + 'static) -> Self {
        Self {
            definer,
            body: Arc::new(body),
        }
    }

    /// Invokes the accessor body against the given manager state.
    pub fn call(&self, state: &S) -> Q {
        (self.body)(state)
    }

    /// Returns the name of the type that defined this accessor.
    pub const fn definer(&self) -> &'static str {
        self.definer
    }

    /// Returns `true` if both accessors share one body allocation.
    pub fn same_body(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

/// One level of a manager type lineage: a type name plus the overrides it
/// defines under each accessor spelling.
///
/// A level with neither override present contributes nothing to resolution;
/// it exists so a lineage can faithfully record every type in the chain.
#[derive(Debug)]
pub struct AccessorLevel<S, Q> {
    definer: &'static str,
    get_query_set: Option<Accessor<S, Q>>,
    get_queryset: Option<Accessor<S, Q>>,
}

impl<S, Q> Clone for AccessorLevel<S, Q> {
    fn clone(&self) -> Self {
        Self {
            definer: self.definer,
            get_query_set: self.get_query_set.clone(),
            get_queryset: self.get_queryset.clone(),
        }
    }
}

impl<S, Q> AccessorLevel<S, Q> {
    /// Creates a level that defines no overrides.
    pub const fn new(definer: &'static str) -> Self {
        Self {
            definer,
            get_query_set: None,
            get_queryset: None,
        }
    }

    /// Returns the name of the type this level describes.
    pub const fn definer(&self) -> &'static str {
        self.definer
    }

    /// Records an override under the old spelling, `get_query_set`.
    #[must_use]
    pub fn with_get_query_set(
        mut self,
        body: impl Fn(&S) -> Q + Send + Sync + 'static,
    ) -> Self {
        self.get_query_set = Some(Accessor::new(self.definer, body));
        self
    }

    /// Records an override under the new spelling, `get_queryset`.
    #[must_use]
    pub fn with_get_queryset(
        mut self,
        body: impl Fn(&S) -> Q + Send + Sync + 'static,
    ) -> Self {
        self.get_queryset = Some(Accessor::new(self.definer, body));
        self
    }

    /// Records one body under both spellings as deliberate synonyms.
    ///
    /// Unlike defining the two spellings separately, this never trips the
    /// ambiguity check because both entries share one allocation.
    #[must_use]
    pub fn with_synonyms(mut self, body: impl Fn(&S) -> Q + Send + Sync + 'static) -> Self {
        let accessor = Accessor::new(self.definer, body);
        self.get_query_set = Some(accessor.clone());
        self.get_queryset = Some(accessor);
        self
    }
}

/// Selects the single accessor both entry points should dispatch to.
///
/// Walks the lineage most-derived-first. The first level that defines
/// either spelling wins: its body backs both `get_query_set` and
/// `get_queryset`, so a customization under one name still runs when called
/// through the other. If no level defines either spelling, the shared
/// `base` implementation backs both.
///
/// # Errors
///
/// Returns [`CompatError::AmbiguousOverride`] if the winning level defines
/// *both* spellings with different bodies. The two names were meant to be
/// synonyms; picking one silently would let the other's behavior drift
/// unnoticed. A level that records one body under both names (see
/// [`AccessorLevel::with_synonyms`]) is accepted.
pub fn pick_accessor<S, Q>(
    lineage: &[AccessorLevel<S, Q>],
    base: &Accessor<S, Q>,
) -> CompatResult<Accessor<S, Q>> {
    for level in lineage {
        match (&level.get_query_set, &level.get_queryset) {
            (Some(old), Some(new)) => {
                if old.same_body(new) {
                    return Ok(new.clone());
                }
                return Err(CompatError::AmbiguousOverride {
                    definer: level.definer.to_string(),
                });
            }
            (Some(only), None) | (None, Some(only)) => {
                tracing::debug!(definer = level.definer, "accessor override selected");
                return Ok(only.clone());
            }
            (None, None) => {}
        }
    }
    Ok(base.clone())
}
