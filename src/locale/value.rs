//! Locale value: the immutable result of a successful parse.

use crate::locale::error::LocaleError;
use crate::locale::parser::parse_locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language, country and variant triple.
///
/// Constructors are plain holders and do not validate; use [`Locale::parse`]
/// or [`parse_locale`] to build a value from untrusted input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    /// Language code (e.g., "zh"), or empty
    language: String,

    /// Region code (e.g., "CN") or numeric area code (e.g., "419"), or empty
    country: String,

    /// Free-form variant, or empty
    variant: String,
}

impl Locale {
    /// Create a locale with only a language.
    pub fn new(language: impl Into<String>) -> Self {
        Self::with_variant(language, "", "")
    }

    /// Create a locale with a language and country.
    pub fn with_country(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self::with_variant(language, country, "")
    }

    /// Create a locale with all three components.
    pub fn with_variant(
        language: impl Into<String>,
        country: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
            variant: variant.into(),
        }
    }

    /// Parse a locale identifier.
    ///
    /// Same rules as [`parse_locale`] for a present input; an empty string
    /// yields the empty locale.
    ///
    /// # Example
    /// ```
    /// use locale_parser::Locale;
    ///
    /// let locale = Locale::parse("_CN").unwrap();
    /// assert_eq!(locale.language(), "");
    /// assert_eq!(locale.country(), "CN");
    /// ```
    pub fn parse(input: &str) -> Result<Self, LocaleError> {
        // A present input never maps to `None`
        Ok(parse_locale(Some(input))?.unwrap_or_default())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Check if all three components are empty
    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.country.is_empty() && self.variant.is_empty()
    }
}

impl fmt::Display for Locale {
    /// Render the underscore form, e.g. `zh_CN_var`, `zh__var` or `_CN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
