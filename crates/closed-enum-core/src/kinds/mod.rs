//! # Built-in Kinds
//!
//! Closed enumerations shipped with the crate.
//!
//! The recurrence-rule kinds (`FREQ` and `BYDAY` values of RFC 5545) are the
//! canonical use of this crate: small fixed vocabularies that are parsed from
//! text case-insensitively and carry a little data of their own.

mod rrule;

pub use rrule::*;
