use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for borders.
    pub surface2: Color,
    /// Muted overlay color for titles and hints.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for the focused input caret.
    pub sapphire: Color,
    /// Accent color for section headings.
    pub mauve: Color,
    /// Stat bars and positive values.
    pub green: Color,
    /// Loading/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Selection highlight background.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the PokéAPI v2 service, without trailing slash.
    pub api_base_url: String,
    /// Freshness window for cached category lists, in seconds.
    pub cache_ttl_secs: u64,
    /// Quiet period after the last keystroke before a search is issued.
    pub search_debounce_ms: u64,
    /// Minimum trimmed query length that triggers a search.
    pub search_min_chars: usize,
    /// Maximum suggestions kept per category.
    pub search_per_category_limit: usize,
    /// Total HTTP request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// HTTP connect timeout, in seconds.
    pub connect_timeout_secs: u64,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            cache_ttl_secs: 300,
            search_debounce_ms: 300,
            search_min_chars: 2,
            search_per_category_limit: 5,
            request_timeout_secs: 15,
            connect_timeout_secs: 10,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Return a short display label such as "Ctrl+C", "F1", "Esc".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// `true` when a key event with `code`/`mods` triggers this chord.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        self.code == code && self.mods == mods
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Leave the detail view and return to search.
    pub back: Vec<KeyChord>,
    /// Toggle the help overlay.
    pub help_overlay: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            exit: vec![KeyChord {
                code: KeyCode::Char('c'),
                mods: KeyModifiers::CONTROL,
            }],
            back: vec![
                KeyChord {
                    code: KeyCode::Esc,
                    mods: KeyModifiers::empty(),
                },
                KeyChord {
                    code: KeyCode::Backspace,
                    mods: KeyModifiers::empty(),
                },
            ],
            help_overlay: vec![KeyChord {
                code: KeyCode::F(1),
                mods: KeyModifiers::empty(),
            }],
        }
    }
}

impl KeyMap {
    /// `true` when any chord in `list` matches the event.
    #[must_use]
    pub fn any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.matches(code, mods))
    }
}
