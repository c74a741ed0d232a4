//! Syntactic checks shared by the action builder and the API operations.

use url::Url;

/// `true` if `value` is an absolute URL with a scheme and a host.
///
/// Empty strings are never valid. No network access is performed.
pub fn is_valid_url(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// `true` if `value` reads as a finite decimal number.
///
/// Surrounding whitespace, a sign, a fractional part and an exponent are
/// all accepted: `"4"`, `" -1"`, `"2.5"`, `"1e3"`.
pub fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}

/// `true` if `value` starts with `+`.
pub fn is_phone_number(value: &str) -> bool {
    value.starts_with('+')
}

/// Split a comma-separated number list into its entries.
///
/// Whitespace around each entry is trimmed; the entries themselves are
/// not validated here.
pub fn split_phone_numbers(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
}

/// `true` if every entry of a comma-separated list passes [`is_phone_number`].
pub fn all_phone_numbers(list: &str) -> bool {
    split_phone_numbers(list).all(is_phone_number)
}
