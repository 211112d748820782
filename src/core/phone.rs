//! Phone number normalization to the `+<country code>` international form

use regex::Regex;
use std::sync::LazyLock;

/// Ukrainian country code, used unless configured otherwise
pub const DEFAULT_COUNTRY_CODE: &str = "380";

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("Invalid regex pattern"));

/// Strip formatting characters, keeping a `+` only when it is the very first
/// character of the input.
pub fn clean_phone(raw: &str) -> String {
    match raw.strip_prefix('+') {
        Some(rest) => format!("+{}", NON_DIGITS.replace_all(rest, "")),
        None => NON_DIGITS.replace_all(raw, "").into_owned(),
    }
}

/// Normalize a phone number using the default country code
pub fn normalize_phone(raw: &str) -> String {
    normalize_phone_with(raw, DEFAULT_COUNTRY_CODE)
}

/// Normalize a phone number to `+<country_code>...`.
///
/// Numbers that already carry a leading `+` are only cleaned. A number
/// starting with the country code gets a `+`; a local number with a trunk
/// `0` has it replaced by the country code.
pub fn normalize_phone_with(raw: &str, country_code: &str) -> String {
    let cleaned = clean_phone(raw);

    if cleaned.starts_with('+') {
        cleaned
    } else if cleaned.starts_with(country_code) {
        format!("+{}", cleaned)
    } else if let Some(local) = cleaned.strip_prefix('0') {
        format!("+{}{}", country_code, local)
    } else {
        format!("+{}{}", country_code, cleaned)
    }
}
