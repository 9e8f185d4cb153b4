// crates/ubike-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// Uses full Unicode lower-case mapping, so mixed Chinese/English station
/// names fold correctly (`"Daan"` -> `"daan"`, `"ＤＡＡＮ"` -> `"ｄａａｎ"`,
/// CJK unchanged). No transliteration is applied: `"大安"` stays `"大安"`.
///
/// # Examples
///
/// ```
/// use ubike_core::text::fold_key;
///
/// assert_eq!(fold_key("Technology Building"), "technology building");
/// assert_eq!(fold_key("ÉCOLE"), "école");
/// assert_eq!(fold_key("大安區"), "大安區");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Substring test of an already folded needle against a raw haystack.
///
/// The empty needle is contained in everything.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_key(haystack).contains(folded_needle)
}
