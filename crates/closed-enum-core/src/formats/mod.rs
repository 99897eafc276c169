//! # Formats Module
//!
//! Serialization formats for closed enumeration values.
//!
//! A value is always written as its canonical name and read back through
//! case-insensitive lookup, so a round trip yields a value equal to the
//! original even though it is a fresh copy.

pub mod by_name;
