pub mod config;
pub mod locale;
pub mod report;

pub use locale::{
    is_language_code, is_numeric_area_code, is_region_code, lookup_list, parse_locale, Locale,
    LocaleError,
};
pub use report::ParseReport;
