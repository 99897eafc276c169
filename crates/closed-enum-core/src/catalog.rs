//! # Catalog
//!
//! Explicit registry of closed enumeration kinds, keyed by kind label.
//!
//! The catalog replaces runtime reflection: each kind is registered once,
//! by type, and from then on its values can be listed and resolved through
//! the label alone. This is what text-driven callers (the CLI, config files)
//! use when the kind is not known at compile time.
//!
//! ## Determinism
//!
//! Kinds are held in a `BTreeMap`, so listings are sorted by label. Values
//! keep the declaration order of their kind.
//!
//! ## Eager Validation
//!
//! `register` refuses a kind whose names collide once case is ignored, so a
//! registered kind can never produce `AmbiguousMatch`.

use crate::enumeration::{ClosedEnumeration, from_name, names, validate};
use crate::erased::AnyEnumeration;
use crate::folding::eq_ignore_case;
use crate::kinds::{Frequency, Weekday};
use crate::primitives::NAME_SEPARATOR;
use crate::types::{EnumerationError, ResolvedValue};
use std::collections::BTreeMap;
use std::fmt;

type NamesFn = fn() -> Vec<&'static str>;
type LookupFn = fn(&str) -> Result<Box<dyn AnyEnumeration>, EnumerationError>;
type ValidateFn = fn() -> Result<(), EnumerationError>;

/// Type-erased entry points of one registered kind.
#[derive(Clone, Copy)]
struct KindEntry {
    names: NamesFn,
    lookup: LookupFn,
    validate: ValidateFn,
}

fn lookup_boxed<T: ClosedEnumeration>(
    name: &str,
) -> Result<Box<dyn AnyEnumeration>, EnumerationError> {
    let value = from_name::<T>(name)?;
    Ok(Box::new(value))
}

// =============================================================================
// CATALOG
// =============================================================================

/// Registry of kinds, keyed by `ClosedEnumeration::KIND`.
#[derive(Clone, Default)]
pub struct Catalog {
    kinds: BTreeMap<&'static str, KindEntry>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("kinds", &self.kinds.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in recurrence-rule kinds.
    pub fn builtin() -> Result<Self, EnumerationError> {
        Self::new().with::<Frequency>()?.with::<Weekday>()
    }

    /// Register kind `T`.
    ///
    /// # Errors
    ///
    /// - [`EnumerationError::DuplicateName`] if two values of `T` collide
    ///   once case is ignored.
    /// - [`EnumerationError::DuplicateKind`] if a kind with the same label
    ///   (ignoring case) is already registered.
    pub fn register<T: ClosedEnumeration>(&mut self) -> Result<(), EnumerationError> {
        if let Err(err) = validate::<T>() {
            tracing::warn!(kind = T::KIND, error = %err, "rejecting kind");
            return Err(err);
        }

        if self.kinds.keys().any(|kind| eq_ignore_case(kind, T::KIND)) {
            tracing::warn!(kind = T::KIND, "kind already registered");
            return Err(EnumerationError::DuplicateKind {
                kind: T::KIND,
                available: self.kinds(),
            });
        }

        self.kinds.insert(
            T::KIND,
            KindEntry {
                names: names::<T>,
                lookup: lookup_boxed::<T>,
                validate: validate::<T>,
            },
        );
        tracing::debug!(kind = T::KIND, values = T::declared().len(), "registered kind");
        Ok(())
    }

    /// Register kind `T`, builder style.
    pub fn with<T: ClosedEnumeration>(mut self) -> Result<Self, EnumerationError> {
        self.register::<T>()?;
        Ok(self)
    }

    /// Labels of all registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.kinds.keys().copied().collect()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no kind is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn entry(&self, kind: &str) -> Result<&KindEntry, EnumerationError> {
        if let Some(entry) = self.kinds.get(kind) {
            return Ok(entry);
        }
        self.kinds
            .iter()
            .find(|(label, _)| eq_ignore_case(label, kind))
            .map(|(_, entry)| entry)
            .ok_or_else(|| EnumerationError::UnknownKind {
                kind: kind.to_string(),
                available: self.kinds(),
            })
    }

    /// Names of every value of `kind`, in declaration order.
    pub fn names(&self, kind: &str) -> Result<Vec<&'static str>, EnumerationError> {
        let entry = self.entry(kind)?;
        Ok((entry.names)())
    }

    /// Names of every value of `kind`, joined with `", "`.
    pub fn describe(&self, kind: &str) -> Result<String, EnumerationError> {
        Ok(self.names(kind)?.join(NAME_SEPARATOR))
    }

    /// Resolve `name` within `kind` to a type-erased value.
    ///
    /// Both the kind label and the name are matched ignoring case.
    pub fn lookup(
        &self,
        kind: &str,
        name: &str,
    ) -> Result<Box<dyn AnyEnumeration>, EnumerationError> {
        let entry = self.entry(kind)?;
        (entry.lookup)(name)
    }

    /// Resolve `name` within `kind` to plain data.
    pub fn resolve(&self, kind: &str, name: &str) -> Result<ResolvedValue, EnumerationError> {
        let value = self.lookup(kind, name)?;
        Ok(ResolvedValue {
            kind: value.kind_label().to_string(),
            name: value.value_name().to_string(),
            position: value.value_position().unwrap_or_default(),
            name_hash: value.value_hash(),
        })
    }

    /// Re-run the uniqueness check of every registered kind.
    ///
    /// Stops at the first failing kind, in label order.
    pub fn validate_all(&self) -> Result<(), EnumerationError> {
        self.kinds.values().try_for_each(|entry| (entry.validate)())
    }

    /// Total number of declared values across all kinds.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.kinds.values().map(|entry| (entry.names)().len()).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_enumeration;
    use crate::erased::{compare, equals};
    use std::cmp::Ordering;

    closed_enumeration! {
        pub struct Clashing;
        values {
            OPEN = "open",
            SHOUTED_OPEN = "OPEN",
        }
    }

    closed_enumeration! {
        /// Same label as the built-in kind, different type.
        pub struct Frequency;
        values {
            RARE = "Rare",
        }
    }

    #[test]
    fn builtin_registers_rrule_kinds() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.kinds(), vec!["Frequency", "Weekday"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.value_count(), 14);
        assert_eq!(catalog.validate_all(), Ok(()));
    }

    #[test]
    fn kind_label_lookup_ignores_case() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(
            catalog.describe("weekday"),
            Ok("MO, TU, WE, TH, FR, SA, SU".to_string())
        );
    }

    #[test]
    fn unknown_kind_lists_registered_kinds() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let err = catalog.names("Colour");
        assert_eq!(
            err,
            Err(EnumerationError::UnknownKind {
                kind: "Colour".to_string(),
                available: vec!["Frequency", "Weekday"],
            })
        );
    }

    #[test]
    fn resolve_returns_canonical_data() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let resolved = catalog.resolve("Frequency", "monthly");
        assert_eq!(
            resolved,
            Ok(ResolvedValue {
                kind: "Frequency".to_string(),
                name: "MONTHLY".to_string(),
                position: 5,
                name_hash: crate::primitives::fnv1a("MONTHLY"),
            })
        );
    }

    #[test]
    fn resolve_propagates_not_found() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let err = catalog.resolve("Weekday", "Funday").err();
        assert!(matches!(err, Some(EnumerationError::NotFound { kind: "Weekday", .. })));
    }

    #[test]
    fn lookups_compare_through_erased_surface() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let mo = catalog.lookup("Weekday", "MO").expect("lookup");
        let mo_again = catalog.lookup("Weekday", "mo").expect("lookup");
        let daily = catalog.lookup("Frequency", "DAILY").expect("lookup");
        assert!(equals(mo.as_ref(), Some(mo_again.as_ref())));
        assert!(!equals(mo.as_ref(), Some(daily.as_ref())));
        assert_eq!(compare(mo.as_ref(), mo_again.as_ref()), Ok(Ordering::Equal));
        assert!(compare(mo.as_ref(), daily.as_ref()).is_err());
    }

    #[test]
    fn register_rejects_colliding_names() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.register::<Clashing>(),
            Err(EnumerationError::DuplicateName {
                kind: "Clashing",
                name: "OPEN",
                existing: "open",
                available: vec!["open", "OPEN"],
            })
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn register_rejects_duplicate_label() {
        let mut catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(
            catalog.register::<Frequency>(),
            Err(EnumerationError::DuplicateKind {
                kind: "Frequency",
                available: vec!["Frequency", "Weekday"],
            })
        );
        assert_eq!(
            catalog.describe("Frequency").map(|s| s.starts_with("SECONDLY")),
            Ok(true)
        );
        assert_eq!(Frequency::RARE.to_string(), "Rare");
    }

    #[test]
    fn registering_twice_lists_registered_kinds() {
        let mut catalog = Catalog::builtin().expect("builtin catalog");
        let err = catalog.register::<Weekday>().expect_err("second registration");
        assert_eq!(err.available(), &["Frequency", "Weekday"]);
        assert!(err.to_string().ends_with("registered kinds are: Frequency, Weekday"));

        let err = Catalog::new()
            .with::<Clashing>()
            .expect_err("colliding names");
        assert!(err.to_string().ends_with("declared values are: open, OPEN"));
    }

    #[test]
    fn debug_lists_kinds() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(
            format!("{:?}", catalog),
            r#"Catalog { kinds: ["Frequency", "Weekday"] }"#
        );
    }
}
