//! Phone-number display formatting.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Country code assumed for bare 10-digit numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "91";

const NATIONAL_DIGITS: usize = 10;

/// Format a phone number for display.
///
/// Ten digits become `+91 XXXXX XXXXX`. Longer numbers treat the leading
/// excess as the country code and group the trailing ten the same way.
/// Anything shorter is returned unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < NATIONAL_DIGITS {
        return raw.to_owned();
    }
    let (country, national) = digits.split_at(digits.len() - NATIONAL_DIGITS);
    let country = if country.is_empty() { DEFAULT_COUNTRY_CODE } else { country };
    let (head, tail) = national.split_at(NATIONAL_DIGITS / 2);
    format!("+{country} {head} {tail}")
}

/// Digits plus an optional leading `+`, suitable for `tel:`/`sms:` targets.
#[must_use]
pub fn dial_string(raw: &str) -> String {
    let digits = digits_only(raw);
    if raw.trim_start().starts_with('+') && !digits.is_empty() {
        format!("+{digits}")
    } else {
        digits
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
