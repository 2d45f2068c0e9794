//! Small helpers shared by the data layer, runtime and UI: JSON extraction,
//! headless detection, and display-width truncation.

use serde_json::Value;
use unicode_width::UnicodeWidthChar;

/// Environment variable that switches the runtime into headless mode.
pub const HEADLESS_ENV: &str = "POKESEARCH_TEST_HEADLESS";

/// What: Report whether the process runs without a real terminal.
///
/// Output:
/// - `true` when `POKESEARCH_TEST_HEADLESS=1`.
///
/// Details:
/// - Headless mode skips raw mode, the alternate screen, mouse capture and drawing.
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - The string value, or `""` when the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Borrow the string at a JSON pointer (e.g. `/type/name`), if any.
#[must_use]
pub fn str_at<'a>(v: &'a Value, pointer: &str) -> Option<&'a str> {
    v.pointer(pointer).and_then(Value::as_str)
}

/// What: Read an unsigned integer at a JSON pointer.
///
/// Output:
/// - `Some(n)` for non-negative integers that fit in `u32`; `None` for null,
///   missing, negative, fractional or oversized values.
#[must_use]
pub fn u32_at(v: &Value, pointer: &str) -> Option<u32> {
    v.pointer(pointer)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// What: Truncate `text` to at most `max` terminal columns.
///
/// Inputs:
/// - `text`: Display string, possibly containing wide characters.
/// - `max`: Column budget.
///
/// Output:
/// - The input unchanged when it fits; otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
