//! # Fixed Primitives
//!
//! Constants shared by discovery, lookup and error rendering.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Separator used when rendering the names of a kind as one line.
///
/// - `describe()` of a kind with values `A`, `B`, `C` is `"A, B, C"`.
/// - Error messages list the available names with the same separator.
pub const NAME_SEPARATOR: &str = ", ";

/// FNV-1a 64-bit offset basis.
///
/// Used by `name_hash` so the hash of a name never depends on the
/// standard library hasher or on the process.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Maximum length accepted for a name passed to a lookup from outside
/// the process (CLI arguments, config values).
///
/// Declared names are never checked against this limit.
pub const MAX_LOOKUP_NAME_LENGTH: usize = 256;

/// Compute the FNV-1a hash of a name.
#[must_use]
pub const fn fnv1a(name: &str) -> u64 {
    let bytes = name.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}
