//! # Case Folding
//!
//! Locale-independent case-insensitive comparison of names.
//!
//! The rule is the Unicode lowercase mapping of every `char`
//! (`char::to_lowercase`), plus final sigma `ς` treated as `σ`. The mapping
//! is fixed by the Unicode tables compiled into the standard library, so the
//! result never depends on the locale of the host.
//!
//! This is lowercase mapping, not full Unicode case folding: expansions such
//! as `ß` to `ss` are not applied, so `"STRASSE"` and `"straße"` differ.

fn lower(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Return the folded form of a name.
#[must_use]
pub fn fold(name: &str) -> String {
    name.chars().flat_map(lower).collect()
}

/// Compare two names ignoring case.
///
/// Does not allocate.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().flat_map(lower).eq(b.chars().flat_map(lower))
}
