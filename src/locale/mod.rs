//! Locale identifier parsing.
//!
//! This module turns `language[_COUNTRY[_VARIANT]]` and `_COUNTRY[_VARIANT]`
//! identifiers into validated [`Locale`] values. Malformed identifiers are
//! rejected with [`LocaleError::InvalidFormat`]; nothing is normalized or
//! corrected along the way.
//!
//! # Architecture
//!
//! - `codes`: ASCII character-class predicates for each identifier segment
//! - `parser`: Ordered rule dispatch from input string to `Locale`
//! - `value`: The immutable `Locale` value and its display form
//! - `lookup`: Fallback search order for resource lookup
//! - `error`: The single rejection kind
//!
//! # Example
//!
//! ```rust
//! use locale_parser::{parse_locale, Locale};
//!
//! let locale = parse_locale(Some("zh_CN_var")).unwrap().unwrap();
//! assert_eq!(locale, Locale::with_variant("zh", "CN", "var"));
//!
//! assert!(parse_locale(None).unwrap().is_none());
//! assert!(parse_locale(Some("zh_cn")).is_err());
//! ```

mod codes;
mod error;
mod lookup;
mod parser;
mod value;

pub use codes::{is_language_code, is_numeric_area_code, is_region_code};
pub use error::LocaleError;
pub use lookup::lookup_list;
pub use parser::parse_locale;
pub use value::Locale;
