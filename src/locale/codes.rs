//! Character-class predicates for locale identifier segments.
//!
//! All checks use fixed ASCII classification so results never depend on the
//! runtime environment's case mapping.

/// Check whether `s` is an ISO 639 style language code.
///
/// # Returns
/// `true` if `s` is 2 or 3 ASCII lowercase letters (e.g., "zh", "haw").
pub fn is_language_code(s: &str) -> bool {
    matches!(s.len(), 2 | 3) && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Check whether `s` is an ISO 3166 alpha-2 style region code.
///
/// # Returns
/// `true` if `s` is exactly 2 ASCII uppercase letters (e.g., "CN").
pub fn is_region_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Check whether `s` is a UN M.49 style numeric area code.
///
/// # Returns
/// `true` if `s` is exactly 3 ASCII digits (e.g., "419").
pub fn is_numeric_area_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())
}
