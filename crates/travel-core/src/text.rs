// crates/travel-core/src/text.rs

//! # Keyword Text Helpers
//!
//! Case folding and the plural-stripping heuristic applied to search terms.

/// Lowercase a string using ASCII case folding only.
///
/// Non-ASCII characters pass through untouched.
#[inline]
pub fn fold_ascii_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Normalize a raw search keyword.
///
/// 1. Lowercase the whole string (ASCII only).
/// 2. If it ends with `"es"`, drop those two characters (`beaches` → `beach`).
/// 3. Otherwise, if it ends with `"s"`, drop one character (`temples` → `temple`).
///
/// This is a heuristic singularizer, not a dictionary lookup. It will
/// happily turn `"bus"` into `"bu"` and `"Paris"` into `"pari"`; callers rely
/// on that exact behaviour. No trimming is done here.
///
/// # Examples
///
/// ```rust
/// use travel_core::text::normalize_keyword;
///
/// assert_eq!(normalize_keyword("Beaches"), "beach");
/// assert_eq!(normalize_keyword("Temples"), "temple");
/// assert_eq!(normalize_keyword("Tokyo"), "tokyo");
/// ```
pub fn normalize_keyword(raw: &str) -> String {
    let mut keyword = fold_ascii_lower(raw);
    if keyword.ends_with("es") {
        keyword.truncate(keyword.len() - 2);
    } else if keyword.ends_with('s') {
        keyword.truncate(keyword.len() - 1);
    }
    keyword
}

/// Case-insensitive (ASCII) substring test against an already-normalized needle.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_ascii_lower(haystack).contains(folded_needle)
}
