//! Theme palette, settings, and config paths for pokesearch.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and management.
mod settings;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{KeyChord, KeyMap, Settings, Theme};

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
