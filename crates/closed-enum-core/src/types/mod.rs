//! # Core Type Definitions
//!
//! This module contains the shared value and error types:
//! - Resolution output (`ResolvedValue`)
//! - Error types (`EnumerationError`)
//!
//! ## Self-documenting Failures
//!
//! Every error carries the full list of declared names (or kinds),
//! recomputed when the error is built. Callers never need a second query
//! to tell a user what they could have typed.

use crate::primitives::NAME_SEPARATOR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// RESOLVED VALUE
// =============================================================================

/// A value resolved through a type-erased path (catalog, CLI).
///
/// Carries only plain data, so it can be rendered or serialized without
/// knowing the concrete kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedValue {
    /// Label of the kind the value belongs to.
    pub kind: String,
    /// Canonical name of the value (declared casing).
    pub name: String,
    /// Index of the value in declaration order.
    pub position: usize,
    /// Stable FNV-1a hash of the name.
    pub name_hash: u64,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by discovery, lookup and comparison.
///
/// - No silent failures: an unknown name never yields a default value
/// - Use `Result<T, EnumerationError>` for fallible operations
/// - Library code never panics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    /// No declared value matched the requested name.
    #[error(
        "unknown {kind} value \"{name}\"; possible values are: {}",
        .available.join(NAME_SEPARATOR)
    )]
    NotFound {
        kind: &'static str,
        name: String,
        available: Vec<&'static str>,
    },

    /// More than one declared value matched the requested name once case was ignored.
    #[error(
        "ambiguous {kind} value \"{name}\" matches {}; possible values are: {}",
        .matches.join(NAME_SEPARATOR),
        .available.join(NAME_SEPARATOR)
    )]
    AmbiguousMatch {
        kind: &'static str,
        name: String,
        matches: Vec<&'static str>,
        available: Vec<&'static str>,
    },

    /// An ordering was requested between values of two different kinds.
    #[error(
        "cannot compare {left_kind} with {right_kind}; possible {left_kind} values are: {}",
        .available.join(NAME_SEPARATOR)
    )]
    IncomparableOperand {
        left_kind: &'static str,
        right_kind: &'static str,
        available: Vec<&'static str>,
    },

    /// Two declared values of one kind share a name once case is ignored.
    #[error(
        "duplicate {kind} value \"{name}\" collides with \"{existing}\"; declared values are: {}",
        .available.join(NAME_SEPARATOR)
    )]
    DuplicateName {
        kind: &'static str,
        name: &'static str,
        existing: &'static str,
        available: Vec<&'static str>,
    },

    /// No registered kind carries the requested label.
    #[error(
        "unknown kind \"{kind}\"; registered kinds are: {}",
        .available.join(NAME_SEPARATOR)
    )]
    UnknownKind {
        kind: String,
        available: Vec<&'static str>,
    },

    /// A kind label was registered twice.
    #[error(
        "kind \"{kind}\" is already registered; registered kinds are: {}",
        .available.join(NAME_SEPARATOR)
    )]
    DuplicateKind {
        kind: &'static str,
        available: Vec<&'static str>,
    },
}

impl EnumerationError {
    /// Names (or kind labels) listed by the error.
    ///
    /// Lookup errors list what a caller could have used instead;
    /// registration errors list what is already declared or registered.
    #[must_use]
    pub fn available(&self) -> &[&'static str] {
        match self {
            Self::NotFound { available, .. }
            | Self::AmbiguousMatch { available, .. }
            | Self::IncomparableOperand { available, .. }
            | Self::DuplicateName { available, .. }
            | Self::UnknownKind { available, .. }
            | Self::DuplicateKind { available, .. } => available,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
