//! Fallback order for locale-dependent resource lookup.

use crate::locale::value::Locale;

/// Build the lookup list for `locale`, most specific first.
///
/// For `zh_CN_var` with default `en` the list is
/// `[zh_CN_var, zh_CN, zh, en]`. The default is appended only if it is not
/// already present.
///
/// # Arguments
/// * `locale` - The locale to start from
/// * `default` - The locale to fall back to last
///
/// # Returns
/// An empty list if `locale` is `None`.
pub fn lookup_list(locale: Option<&Locale>, default: Option<&Locale>) -> Vec<Locale> {
    let Some(locale) = locale else {
        return Vec::new();
    };

    let mut list = Vec::with_capacity(4);
    list.push(locale.clone());

    if !locale.variant().is_empty() {
        list.push(Locale::with_country(locale.language(), locale.country()));
    }
    if !locale.country().is_empty() {
        list.push(Locale::new(locale.language()));
    }

    if let Some(default) = default {
        if !list.contains(default) {
            list.push(default.clone());
        }
    }

    list
}
