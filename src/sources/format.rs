//! Name/text normalization shared by list fetchers and detail formatters.

use serde_json::Value;

/// Fallback when no English text entry exists.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Fallback for missing numeric move fields and damage class.
pub const NOT_AVAILABLE: &str = "N/A";
/// Fallback for missing nature stats and flavors.
pub const NONE_LABEL: &str = "None";
/// Placeholder artwork for Pokémon without sprites.
pub const PLACEHOLDER_POKEMON: &str = "/api/placeholder/200/200";
/// Placeholder artwork for locations (the API has none).
pub const PLACEHOLDER_ROUTE: &str = "/api/placeholder/400/200";
/// Placeholder sprite for items and TMs.
pub const PLACEHOLDER_ITEM: &str = "/api/placeholder/150/150";

/// What: Turn an API identifier into a display name.
///
/// Inputs:
/// - `name`: Hyphenated identifier such as `"body-slam"`.
///
/// Output:
/// - Tokens split on `-`, first character of each upper-cased, joined with a space (`"Body Slam"`).
///
/// Details:
/// - Idempotent: already formatted names contain no hyphens and already start upper-case.
#[must_use]
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// What: Extract the numeric id from a resource URL.
///
/// Inputs:
/// - `url`: e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
///
/// Output:
/// - `Some(25)`; `None` when the last path segment is not a number.
#[must_use]
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Replace form-feed, newline and carriage-return characters with spaces.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, '\u{c}' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

/// What: First run of ASCII digits in `s` (`"tm08"` -> `"08"`).
///
/// Output:
/// - The digits, or an empty string when there are none.
#[must_use]
pub fn first_digit_run(s: &str) -> &str {
    let Some(start) = s.find(|c: char| c.is_ascii_digit()) else {
        return "";
    };
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// `TM<number>: <Move Name>` display name for a machine.
#[must_use]
pub fn tm_display_name(item_name: &str, move_name: &str) -> String {
    format!(
        "TM{}: {}",
        first_digit_run(item_name),
        format_name(move_name)
    )
}

/// What: Find the first entry of `v[key]` whose `language.name` is `"en"`.
///
/// Inputs:
/// - `v`: JSON object holding a localized entry array.
/// - `key`: Array field, e.g. `flavor_text_entries` or `effect_entries`.
///
/// Output:
/// - Borrowed entry, or `None` when missing.
#[must_use]
pub fn english_entry<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.get(key)?
        .as_array()?
        .iter()
        .find(|e| e.pointer("/language/name").and_then(Value::as_str) == Some("en"))
}

/// What: Sanitized English text from a localized entry array.
///
/// Inputs:
/// - `v`: JSON object.
/// - `key`: Entry array field.
/// - `text_field`: Field holding the text inside each entry (`flavor_text`, `text`, `effect`).
///
/// Output:
/// - Sanitized text or [`NO_DESCRIPTION`].
#[must_use]
pub fn english_text(v: &Value, key: &str, text_field: &str) -> String {
    english_entry(v, key)
        .and_then(|e| e.get(text_field))
        .and_then(Value::as_str)
        .map_or_else(|| NO_DESCRIPTION.to_string(), sanitize_text)
}
