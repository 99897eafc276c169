//! # Type-Erased Values
//!
//! Equality and ordering between values whose kinds are only known at
//! runtime (catalog lookups, CLI input).
//!
//! Typed code should use `PartialEq` and `Ord` directly: the compiler rules
//! out comparisons between kinds. Here the kind check happens at runtime:
//! - [`equals`] answers `false` for a missing operand or a different kind
//! - [`compare`] fails with `IncomparableOperand` for a different kind

use crate::enumeration::{ClosedEnumeration, names};
use crate::types::EnumerationError;
use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// Object-safe view of a closed enumeration value.
///
/// Implemented for every [`ClosedEnumeration`].
pub trait AnyEnumeration: Any + Send + Sync {
    /// Label of the value's kind.
    fn kind_label(&self) -> &'static str;

    /// Runtime identity of the value's kind.
    fn kind_id(&self) -> TypeId;

    /// Canonical name of the value.
    fn value_name(&self) -> &'static str;

    /// Index of the value in declaration order.
    fn value_position(&self) -> Option<usize>;

    /// Stable FNV-1a hash of the name.
    fn value_hash(&self) -> u64;

    /// Names of every declared value of the same kind.
    fn available_names(&self) -> Vec<&'static str>;

    /// Upcast for downcasting to the concrete kind.
    fn as_any(&self) -> &dyn Any;
}

impl<T: ClosedEnumeration> AnyEnumeration for T {
    fn kind_label(&self) -> &'static str {
        T::KIND
    }

    fn kind_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn value_name(&self) -> &'static str {
        ClosedEnumeration::name(self)
    }

    fn value_position(&self) -> Option<usize> {
        self.position()
    }

    fn value_hash(&self) -> u64 {
        self.name_hash()
    }

    fn available_names(&self) -> Vec<&'static str> {
        names::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for dyn AnyEnumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.kind_label(), self.value_name())
    }
}

impl dyn AnyEnumeration {
    /// Recover the concrete value if it is of kind `T`.
    pub fn downcast_ref<T: ClosedEnumeration>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Check whether two values are the same logical value.
///
/// True only when both operands exist, have the same kind and ordinal-equal
/// names. Never fails.
pub fn equals(left: &dyn AnyEnumeration, right: Option<&dyn AnyEnumeration>) -> bool {
    right.is_some_and(|right| {
        left.kind_id() == right.kind_id() && left.value_name() == right.value_name()
    })
}

/// Order two values by ordinal name comparison.
///
/// # Errors
///
/// [`EnumerationError::IncomparableOperand`] when the kinds differ. The error
/// lists every name of the left operand's kind.
pub fn compare(
    left: &dyn AnyEnumeration,
    right: &dyn AnyEnumeration,
) -> Result<Ordering, EnumerationError> {
    if left.kind_id() != right.kind_id() {
        tracing::debug!(
            left = left.kind_label(),
            right = right.kind_label(),
            "refusing to order values of different kinds"
        );
        return Err(EnumerationError::IncomparableOperand {
            left_kind: left.kind_label(),
            right_kind: right.kind_label(),
            available: left.available_names(),
        });
    }
    Ok(left.value_name().cmp(right.value_name()))
}
