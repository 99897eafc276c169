//! # Closed Enumeration
//!
//! The base abstraction: a kind declares a fixed set of named singleton
//! values, and this module discovers them, compares them and resolves
//! names back to them.
//!
//! ## Discovery
//!
//! A kind exposes its declared values through [`ClosedEnumeration::declared`],
//! an explicit `'static` slice in declaration order. The
//! [`closed_enumeration!`](crate::closed_enumeration) macro writes that slice
//! for you. Values built ad hoc (outside the slice) are never discovered.
//!
//! Discovery is not cached: every call to [`get_all`] walks the declared
//! slice again.
//!
//! ## Identity
//!
//! Two values are equal when they have the same kind and the same name.
//! With static typing the kind check is done by the compiler: `PartialEq` is
//! only implemented between values of one kind. See [`crate::erased`] for
//! comparisons between values whose kinds are only known at runtime.

use crate::folding::{eq_ignore_case, fold};
use crate::primitives::{NAME_SEPARATOR, fnv1a};
use crate::types::EnumerationError;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::FusedIterator;

// =============================================================================
// TRAIT
// =============================================================================

/// A kind whose complete set of values is fixed at compile time.
///
/// Implementors must keep `PartialEq`, `Hash` and `Ord` consistent with
/// [`name`](Self::name): equality is ordinal name equality, the hash feeds
/// only the name, ordering is ordinal name ordering. The
/// [`closed_enumeration!`](crate::closed_enumeration) macro generates all of
/// this.
pub trait ClosedEnumeration:
    Sized + Clone + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Label of the kind, used in diagnostics and as catalog key.
    const KIND: &'static str;

    /// Every declared value, in declaration order.
    fn declared() -> &'static [Self];

    /// Canonical, case-sensitive name of this value.
    fn name(&self) -> &'static str;

    /// All declared values, lazily.
    fn all() -> Members<Self> {
        get_all::<Self>()
    }

    /// Names of all declared values joined with `", "`.
    fn describe() -> String {
        names_of::<Self>()
    }

    /// Resolve a name to its declared value, ignoring case.
    fn from_name(name: &str) -> Result<Self, EnumerationError> {
        from_name::<Self>(name)
    }

    /// Index of this value in declaration order.
    ///
    /// `None` for a value whose name was never declared.
    fn position(&self) -> Option<usize> {
        Self::declared()
            .iter()
            .position(|declared| declared.name() == self.name())
    }

    /// Stable 64-bit hash of the name.
    ///
    /// Unlike `Hash`, the result is identical across processes and builds.
    /// Values of different kinds sharing a name hash identically.
    fn name_hash(&self) -> u64 {
        fnv1a(self.name())
    }
}

// =============================================================================
// DISCOVERY
// =============================================================================

/// Lazy sequence over the declared values of a kind.
///
/// Restartable: calling [`get_all`] again starts a new walk.
#[derive(Debug, Clone)]
pub struct Members<T: 'static> {
    inner: std::slice::Iter<'static, T>,
}

impl<T: Clone> Iterator for Members<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for Members<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().cloned()
    }
}

impl<T: Clone> ExactSizeIterator for Members<T> {}

impl<T: Clone> FusedIterator for Members<T> {}

/// Discover every declared value of `T`.
pub fn get_all<T: ClosedEnumeration>() -> Members<T> {
    let declared = T::declared();
    tracing::trace!(kind = T::KIND, count = declared.len(), "discovering values");
    Members {
        inner: declared.iter(),
    }
}

/// Names of every declared value of `T`, in declaration order.
pub fn names<T: ClosedEnumeration>() -> Vec<&'static str> {
    get_all::<T>().map(|value| value.name()).collect()
}

/// Render the names of `T` joined with `", "`.
///
/// An empty kind renders as the empty string.
pub fn names_of<T: ClosedEnumeration>() -> String {
    names::<T>().join(NAME_SEPARATOR)
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Resolve `name` to the declared value of `T`, ignoring case.
///
/// # Errors
///
/// - [`EnumerationError::NotFound`] when no value matches.
/// - [`EnumerationError::AmbiguousMatch`] when more than one value matches.
///
/// Both list every name of `T`, discovered again at failure time.
pub fn from_name<T: ClosedEnumeration>(name: &str) -> Result<T, EnumerationError> {
    let mut matches: Vec<T> = get_all::<T>()
        .filter(|value| eq_ignore_case(value.name(), name))
        .collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => {
            tracing::debug!(kind = T::KIND, name, "no value matches name");
            Err(EnumerationError::NotFound {
                kind: T::KIND,
                name: name.to_string(),
                available: names::<T>(),
            })
        }
        count => {
            tracing::debug!(kind = T::KIND, name, count, "name matches several values");
            Err(EnumerationError::AmbiguousMatch {
                kind: T::KIND,
                name: name.to_string(),
                matches: matches.iter().map(|value| value.name()).collect(),
                available: names::<T>(),
            })
        }
    }
}

/// Check that no two declared values of `T` collide once case is ignored.
///
/// [`from_name`] reports such collisions lazily as `AmbiguousMatch`; this
/// check reports them up front.
///
/// # Errors
///
/// [`EnumerationError::DuplicateName`] for the first colliding pair, in
/// declaration order.
pub fn validate<T: ClosedEnumeration>() -> Result<(), EnumerationError> {
    let mut seen: BTreeMap<String, &'static str> = BTreeMap::new();
    for value in T::declared() {
        if let Some(existing) = seen.insert(fold(value.name()), value.name()) {
            return Err(EnumerationError::DuplicateName {
                kind: T::KIND,
                name: value.name(),
                existing,
                available: names::<T>(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
