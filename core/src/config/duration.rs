//! `"<digits><unit>"` duration strings

use serde_json::Value;

/// Parse `30s`, `5m`, `2h` or `1d` (unit case insensitive) into milliseconds.
///
/// Bare numbers are rejected so that a value typed without its unit does
/// not silently become milliseconds.
pub fn parse_duration(value: &Value) -> Option<u64> {
    let text = value.as_str()?;
    let unit = text.chars().last()?;
    let digits = &text[..text.len() - unit.len_utf8()];

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let factor: u64 = match unit.to_ascii_lowercase() {
        's' => 1_000,
        'm' => 60 * 1_000,
        'h' => 60 * 60 * 1_000,
        'd' => 24 * 60 * 60 * 1_000,
        _ => return None,
    };

    digits.parse::<u64>().ok()?.checked_mul(factor)
}
