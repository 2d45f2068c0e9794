use std::fs;
use std::path::Path;

use super::parsing::{parse_key_chord, strip_inline_comment};
use super::paths::settings_path;
use super::types::Settings;

/// Content written to `settings.conf` on first run.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "\
# pokesearch settings
# key = value; lines starting with # or // are comments.

# PokeAPI base URL (no trailing slash)
api_base_url = https://pokeapi.co/api/v2

# Seconds a fetched category list stays fresh
cache_ttl_secs = 300

# Search tuning
search_debounce_ms = 300
search_min_chars = 2
search_per_category_limit = 5

# HTTP timeouts (seconds)
request_timeout_secs = 15
connect_timeout_secs = 10

# Key bindings (uncomment to override; back defaults to Esc and Backspace)
# keybind_exit = Ctrl+C
# keybind_back = Esc
# keybind_help = F1
";

/// What: Parse settings text into a [`Settings`] value.
///
/// Inputs:
/// - `content`: Full text of a `settings.conf` file.
///
/// Output:
/// - Settings with every recognized key applied over the defaults.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Invalid values keep the default and log at `warn`; unknown keys log at `debug`.
/// - Zero values for TTL, limits and timeouts are rejected.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        let applied = match key.as_str() {
            "api_base_url" | "base_url" => {
                let v = val.trim_end_matches('/');
                if v.is_empty() {
                    false
                } else {
                    out.api_base_url = v.to_string();
                    true
                }
            }
            "cache_ttl_secs" => set_positive(&mut out.cache_ttl_secs, val),
            "search_debounce_ms" => val
                .parse::<u64>()
                .map(|v| out.search_debounce_ms = v)
                .is_ok(),
            "search_min_chars" => val
                .parse::<usize>()
                .map(|v| out.search_min_chars = v)
                .is_ok(),
            "search_per_category_limit" => {
                set_positive_usize(&mut out.search_per_category_limit, val)
            }
            "request_timeout_secs" => set_positive(&mut out.request_timeout_secs, val),
            "connect_timeout_secs" => set_positive(&mut out.connect_timeout_secs, val),
            "keybind_exit" | "keybind_quit" => {
                parse_key_chord(val).map(|ch| out.keymap.exit = vec![ch]).is_some()
            }
            "keybind_back" => parse_key_chord(val).map(|ch| out.keymap.back = vec![ch]).is_some(),
            "keybind_help" | "keybind_help_overlay" => parse_key_chord(val)
                .map(|ch| out.keymap.help_overlay = vec![ch])
                .is_some(),
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
                true
            }
        };
        if !applied {
            tracing::warn!(key = %key, value = %val, "invalid settings value; keeping default");
        }
    }
    out
}

/// Store `val` into `slot` when it parses as a non-zero `u64`.
fn set_positive(slot: &mut u64, val: &str) -> bool {
    match val.parse::<u64>() {
        Ok(v) if v > 0 => {
            *slot = v;
            true
        }
        _ => false,
    }
}

/// Store `val` into `slot` when it parses as a non-zero `usize`.
fn set_positive_usize(slot: &mut usize, val: &str) -> bool {
    match val.parse::<usize>() {
        Ok(v) if v > 0 => {
            *slot = v;
            true
        }
        _ => false,
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings not readable; using defaults");
            Settings::default()
        }
    }
}

/// What: Load user settings, writing a skeleton file on first run.
///
/// Output:
/// - Settings from `settings.conf` under the config directory, or defaults.
pub fn settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        match fs::write(&path, SKELETON_SETTINGS_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write settings skeleton"),
        }
    }
    load_settings_from(&path)
}
