//! Locale parser: ordered rule dispatch from identifier string to `Locale`.
//!
//! Two grammars are accepted:
//!
//! - language-first: `language`, `language_COUNTRY`, `language_COUNTRY_variant`
//!   (COUNTRY may be empty in the three-segment form, e.g. `zh__var`)
//! - country-first: `_COUNTRY`, `_COUNTRY_variant`
//!
//! The country-first form is dispatched on its leading underscore before any
//! splitting, so `_cn` can never be read as an empty language plus a country.
//! Lengths and positions are counted in characters.

use crate::locale::codes::{is_language_code, is_numeric_area_code, is_region_code};
use crate::locale::error::{LocaleError, Result};
use crate::locale::value::Locale;

/// Parse an optional locale identifier.
///
/// # Arguments
/// * `input` - The identifier, or `None` when the caller has none
///
/// # Returns
/// * `Ok(None)` if `input` is `None`
/// * `Ok(Some(Locale::default()))` if `input` is empty
/// * `Ok(Some(locale))` if `input` is a well-formed identifier
/// * `Err(LocaleError::InvalidFormat)` otherwise, carrying the input
///
/// # Example
/// ```
/// use locale_parser::{parse_locale, Locale};
///
/// assert_eq!(
///     parse_locale(Some("zh__var")).unwrap(),
///     Some(Locale::with_variant("zh", "", "var"))
/// );
/// assert!(parse_locale(Some("zh_CN_var_")).is_err());
/// ```
pub fn parse_locale(input: Option<&str>) -> Result<Option<Locale>> {
    let Some(input) = input else {
        return Ok(None);
    };

    if input.is_empty() {
        return Ok(Some(Locale::default()));
    }

    // `#` introduces script/extension suffixes, which are unsupported
    if input.contains('#') {
        return Err(LocaleError::invalid(input));
    }

    let len = input.chars().count();
    if len < 2 {
        return Err(LocaleError::invalid(input));
    }

    let locale = match input.strip_prefix('_') {
        Some(rest) => parse_country_first(input, rest, len)?,
        None => parse_language_first(input)?,
    };

    Ok(Some(locale))
}

/// `_CC` or `_CC_variant`. `rest` is `input` without the leading underscore.
fn parse_country_first(input: &str, rest: &str, len: usize) -> Result<Locale> {
    if len < 3 {
        return Err(LocaleError::invalid(input));
    }

    let mut chars = rest.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Err(LocaleError::invalid(input));
    };
    if !first.is_ascii_uppercase() || !second.is_ascii_uppercase() {
        return Err(LocaleError::invalid(input));
    }

    // Both characters are ASCII, so byte offsets match character offsets from here
    let country = &rest[..2];
    if len == 3 {
        return Ok(Locale::with_country("", country));
    }

    // Need at least a separator and one variant character
    if len < 5 {
        return Err(LocaleError::invalid(input));
    }

    if chars.next() != Some('_') {
        return Err(LocaleError::invalid(input));
    }

    Ok(Locale::with_variant("", country, &rest[3..]))
}

/// `ll`, `ll_CC` or `ll_CC_variant`, with `CC` also allowed as a numeric area code.
fn parse_language_first(input: &str) -> Result<Locale> {
    let segments: Vec<&str> = input.split('_').collect();

    match segments.as_slice() {
        [language] if is_language_code(language) => Ok(Locale::new(*language)),
        [language, country] if is_language_code(language) && is_country(country) => {
            Ok(Locale::with_country(*language, *country))
        }
        [language, country, variant]
            if is_language_code(language) && (country.is_empty() || is_country(country)) =>
        {
            Ok(Locale::with_variant(*language, *country, *variant))
        }
        _ => Err(LocaleError::invalid(input)),
    }
}

fn is_country(s: &str) -> bool {
    is_region_code(s) || is_numeric_area_code(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Option<Locale>> {
        parse_locale(Some(input))
    }

    fn assert_rejected(input: &str) {
        assert_eq!(
            parse(input),
            Err(LocaleError::InvalidFormat(input.to_string())),
            "expected '{}' to be rejected",
            input
        );
    }

    // ==================== Absent And Empty Input Tests ====================

    #[test]
    fn test_none_returns_none() {
        assert_eq!(parse_locale(None), Ok(None));
    }

    #[test]
    fn test_empty_returns_empty_locale() {
        assert_eq!(parse(""), Ok(Some(Locale::default())));
    }

    // ==================== Early Rejection Tests ====================

    #[test]
    fn test_hash_rejected() {
        assert_rejected("#china");
        assert_rejected("zh_CN_#Hans");
        assert_rejected("zh_CN_var#x");
    }

    #[test]
    fn test_hash_checked_before_length() {
        assert_rejected("#");
    }

    #[test]
    fn test_single_character_rejected() {
        assert_rejected("s");
        assert_rejected("_");
        assert_rejected("Z");
    }

    #[test]
    fn test_single_multibyte_character_rejected() {
        assert_rejected("é");
    }

    // ==================== Country-First Tests ====================

    #[test]
    fn test_underscore_length_two_rejected() {
        assert_rejected("_s");
        assert_rejected("_C");
    }

    #[test]
    fn test_underscore_lowercase_country_rejected() {
        assert_rejected("_sC");
        assert_rejected("_Cs");
        assert_rejected("_cn");
    }

    #[test]
    fn test_underscore_country_only() {
        assert_eq!(parse("_CN"), Ok(Some(Locale::with_country("", "CN"))));
    }

    #[test]
    fn test_underscore_length_four_rejected() {
        assert_rejected("_CNz");
        assert_rejected("_CN_");
    }

    #[test]
    fn test_underscore_missing_separator_rejected() {
        assert_rejected("_CNchengdu");
    }

    #[test]
    fn test_underscore_with_variant() {
        assert_eq!(
            parse("_CN_var"),
            Ok(Some(Locale::with_variant("", "CN", "var")))
        );
    }

    #[test]
    fn test_underscore_variant_is_not_split() {
        assert_eq!(
            parse("_CN_a_b"),
            Ok(Some(Locale::with_variant("", "CN", "a_b")))
        );
    }

    #[test]
    fn test_underscore_numeric_country_rejected() {
        // Numeric area codes are only accepted after a language
        assert_rejected("_123");
    }

    #[test]
    fn test_underscore_non_ascii_variant() {
        assert_eq!(
            parse("_CN_成都"),
            Ok(Some(Locale::with_variant("", "CN", "成都")))
        );
    }

    #[test]
    fn test_underscore_non_ascii_country_rejected() {
        assert_rejected("_ÄÖ");
    }

    // ==================== Language-First Tests ====================

    #[test]
    fn test_language_only() {
        assert_eq!(parse("zh"), Ok(Some(Locale::new("zh"))));
        assert_eq!(parse("haw"), Ok(Some(Locale::new("haw"))));
    }

    #[test]
    fn test_language_invalid() {
        assert_rejected("ZH");
        assert_rejected("zhcn");
        assert_rejected("z1");
    }

    #[test]
    fn test_language_and_country() {
        assert_eq!(parse("zh_CN"), Ok(Some(Locale::with_country("zh", "CN"))));
    }

    #[test]
    fn test_language_and_numeric_area() {
        assert_eq!(parse("zh_123"), Ok(Some(Locale::with_country("zh", "123"))));
    }

    #[test]
    fn test_language_country_variant() {
        assert_eq!(
            parse("zh_CN_var"),
            Ok(Some(Locale::with_variant("zh", "CN", "var")))
        );
    }

    #[test]
    fn test_language_numeric_area_variant() {
        assert_eq!(
            parse("zh_123_var"),
            Ok(Some(Locale::with_variant("zh", "123", "var")))
        );
    }

    #[test]
    fn test_language_empty_country_variant() {
        assert_eq!(
            parse("zh__var"),
            Ok(Some(Locale::with_variant("zh", "", "var")))
        );
    }

    #[test]
    fn test_language_country_empty_variant() {
        assert_eq!(
            parse("zh_CN_"),
            Ok(Some(Locale::with_variant("zh", "CN", "")))
        );
    }

    #[test]
    fn test_language_empty_country_empty_variant() {
        assert_eq!(parse("zh__"), Ok(Some(Locale::new("zh"))));
    }

    #[test]
    fn test_two_segments_require_country() {
        assert_rejected("zh_");
    }

    #[test]
    fn test_too_many_segments_rejected() {
        assert_rejected("zh_CN_var_");
        assert_rejected("zh_CN_var_extra");
        assert_rejected("zh___");
    }

    #[test]
    fn test_blank_language_rejected() {
        assert_rejected(" _");
    }

    #[test]
    fn test_lowercase_country_rejected() {
        assert_rejected("zh_cn");
        assert_rejected("zh_cn_var");
    }

    #[test]
    fn test_bad_country_rejected() {
        assert_rejected("zh_CHN");
        assert_rejected("zh_12");
        assert_rejected("zh_1234_var");
    }

    #[test]
    fn test_no_trimming() {
        assert_rejected(" zh");
        assert_rejected("zh_CN ");
    }

    #[test]
    fn test_hyphen_separator_rejected() {
        assert_rejected("zh-CN");
    }

    // ==================== Determinism Tests ====================

    #[test]
    fn test_same_input_same_outcome() {
        for input in ["zh_CN", "zh_cn", "_CN_x", ""] {
            assert_eq!(parse(input), parse(input));
        }
    }

    // ==================== Property Tests ====================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics(s in "\\PC*") {
                let _ = parse_locale(Some(s.as_str()));
            }

            #[test]
            fn hash_always_rejected(prefix in ".*", suffix in ".*") {
                let input = format!("{}#{}", prefix, suffix);
                prop_assert!(parse_locale(Some(input.as_str())).is_err());
            }

            #[test]
            fn language_alone_accepted(lang in "[a-z]{2,3}") {
                prop_assert_eq!(parse_locale(Some(lang.as_str())), Ok(Some(Locale::new(lang.clone()))));
            }

            #[test]
            fn language_country_variant_accepted(
                lang in "[a-z]{2,3}",
                country in "[A-Z]{2}|[0-9]{3}",
                variant in "[^_#]*",
            ) {
                let two = format!("{}_{}", lang, country);
                prop_assert_eq!(
                    parse_locale(Some(two.as_str())),
                    Ok(Some(Locale::with_country(lang.clone(), country.clone())))
                );

                let three = format!("{}_{}_{}", lang, country, variant);
                prop_assert_eq!(
                    parse_locale(Some(three.as_str())),
                    Ok(Some(Locale::with_variant(lang, country, variant)))
                );
            }

            #[test]
            fn country_first_accepted(country in "[A-Z]{2}", variant in "[^#]+") {
                let bare = format!("_{}", country);
                prop_assert_eq!(
                    parse_locale(Some(bare.as_str())),
                    Ok(Some(Locale::with_country("", country.clone())))
                );

                let full = format!("_{}_{}", country, variant);
                prop_assert_eq!(
                    parse_locale(Some(full.as_str())),
                    Ok(Some(Locale::with_variant("", country, variant)))
                );
            }

            #[test]
            fn accepted_values_satisfy_invariant(s in "[a-zA-Z0-9_ ]{0,12}") {
                if let Ok(Some(locale)) = parse_locale(Some(s.as_str())) {
                    prop_assert!(locale.language().is_empty() || is_language_code(locale.language()));
                    prop_assert!(locale.country().is_empty() || is_country(locale.country()));
                }
            }

            #[test]
            fn display_reparses(s in "[a-zA-Z0-9_]{0,12}") {
                if let Ok(Some(locale)) = parse_locale(Some(s.as_str())) {
                    prop_assert_eq!(Locale::parse(&locale.to_string()), Ok(locale));
                }
            }
        }
    }
}
