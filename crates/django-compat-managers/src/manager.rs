//! The compatibility manager.
//!
//! [`CompatManager`] is the entry point callers hold: it owns the manager
//! state, resolves its accessor once at construction, and exposes both the
//! old and new accessor spellings as interchangeable facades over that
//! single resolved binding.

use django_compat_core::CompatResult;

use crate::accessor::{pick_accessor, Accessor, AccessorLevel};

/// A manager whose queryset accessor is reachable under both spellings.
///
/// Override resolution happens exactly once, when the manager is
/// constructed; every later call through either
/// [`get_query_set`](CompatManager::get_query_set) or
/// [`get_queryset`](CompatManager::get_queryset) dispatches through the
/// binding chosen then. Calling through either name, in any order, yields
/// identical results for a given state.
///
/// # Examples
///
/// ```
/// use django_compat_managers::{Accessor, AccessorLevel, CompatManager};
///
/// let base = Accessor::new("Manager", |rooms: &Vec<&str>| rooms.clone());
/// let lineage = vec![AccessorLevel::new("RoomManager")
///     .with_get_query_set(|rooms: &Vec<&str>| {
///         let mut sorted = rooms.clone();
///         sorted.sort_unstable();
///         sorted
///     })];
///
/// let rooms = CompatManager::new(vec!["Living room", "Attic"], &lineage, &base).unwrap();
/// assert_eq!(rooms.get_query_set(), rooms.get_queryset());
/// assert_eq!(rooms.get_queryset(), vec!["Attic", "Living room"]);
/// ```
#[derive(Debug)]
pub struct CompatManager<S, Q> {
    state: S,
    accessor: Accessor<S, Q>,
}

impl<S, Q> CompatManager<S, Q> {
    /// Builds a manager, resolving the accessor lineage immediately.
    ///
    /// `lineage` is ordered most-derived-first; `base` is the shared
    /// default implementation used when no level customizes either
    /// spelling.
    ///
    /// # Errors
    ///
    /// Returns [`CompatError::AmbiguousOverride`](django_compat_core::CompatError::AmbiguousOverride)
    /// if the winning lineage level defines both spellings with different
    /// bodies.
    pub fn new(
        state: S,
        lineage: &[AccessorLevel<S, Q>],
        base: &Accessor<S, Q>,
    ) -> CompatResult<Self> {
        let accessor = pick_accessor(lineage, base)?;
        Ok(Self { state, accessor })
    }

    /// The old accessor spelling.
    pub fn get_query_set(&self) -> Q {
        self.accessor.call(&self.state)
    }

    /// The new accessor spelling.
    pub fn get_queryset(&self) -> Q {
        self.accessor.call(&self.state)
    }

    /// Returns the manager state, for derived manager methods.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Returns the resolved accessor backing both spellings.
    pub const fn accessor(&self) -> &Accessor<S, Q> {
        &self.accessor
    }
}
