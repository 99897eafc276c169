//! # closed-enum-core
//!
//! Closed enumerations - THE LOGIC.
//!
//! A closed enumeration is a kind whose complete set of values is fixed and
//! declared once, at compile time. Unlike a plain Rust `enum`, every value is
//! a struct instance that can carry its own data, while the set still behaves
//! like an enum:
//! - all declared values can be discovered (`get_all`, `describe`)
//! - values compare by logical identity: same kind, same name
//! - a human-readable name resolves back to the canonical value (`from_name`)
//!
//! ## Architecture
//!
//! - `enumeration` - the `ClosedEnumeration` trait, discovery and lookup
//! - `declare` - the `closed_enumeration!` macro that declares a kind
//! - `erased` - runtime-checked comparison between values of unknown kind
//! - `catalog` - explicit registry resolving kinds by label
//! - `kinds` - built-in recurrence-rule kinds (`Frequency`, `Weekday`)
//! - `formats` - serde support writing values as their names
//!
//! ## Architectural Constraints
//!
//! - No runtime registration of values: the set is closed at compile time
//! - No caching: discovery walks the declared slice on every call
//! - Deterministic: locale-independent case folding, sorted catalogs
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod declare;
pub mod enumeration;
pub mod erased;
pub mod folding;
pub mod formats;
pub mod kinds;
pub mod primitives;
pub mod types;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use catalog::Catalog;
pub use enumeration::{
    ClosedEnumeration, Members, from_name, get_all, names, names_of, validate,
};
pub use erased::AnyEnumeration;
pub use kinds::{Frequency, Weekday};
pub use types::{EnumerationError, ResolvedValue};
