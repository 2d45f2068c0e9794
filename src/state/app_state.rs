//! Central `AppState` container owned by the main loop.

use ratatui::widgets::ListState;

use crate::state::navigator::SuggestionNavigator;
use crate::state::types::{DetailKey, DetailRecord};
use crate::theme::KeyMap;

/// Progress of the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailStatus {
    /// Fetch in flight.
    Loading,
    /// Formatted record ready to render.
    Loaded(DetailRecord),
    /// Fetch failed; the message is shown with a back hint.
    Error(String),
}

/// Top-level screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Input line plus dropdown.
    Search,
    /// Detail page for one entity.
    Details {
        /// Which entity is shown.
        key: DetailKey,
        /// Load progress.
        status: DetailStatus,
    },
}

/// Application state mutated by input handlers and background results.
///
/// Only the main loop touches it; workers talk back through channels.
#[derive(Debug)]
pub struct AppState {
    /// Query text, suggestions and dropdown navigation.
    pub navigator: SuggestionNavigator,
    /// Current screen.
    pub view: View,
    /// Monotonic id assigned to the next outgoing query.
    pub next_query_id: u64,
    /// Id of the most recent query; older results are discarded.
    pub latest_query_id: u64,
    /// True between sending a query and applying its results.
    pub search_pending: bool,
    /// Trimmed query length below which no search runs.
    pub search_min_chars: usize,
    /// Whether the key binding overlay is shown.
    pub help_open: bool,
    /// Active key bindings.
    pub keymap: KeyMap,
    /// Dropdown list selection/scroll state.
    pub dropdown_state: ListState,
    /// Vertical scroll of the detail body.
    pub details_scroll: u16,
    /// Input box rectangle (x, y, width, height) from the last draw.
    pub input_rect: Option<(u16, u16, u16, u16)>,
    /// Dropdown inner rectangle (x, y, width, height) from the last draw.
    pub dropdown_rect: Option<(u16, u16, u16, u16)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            navigator: SuggestionNavigator::new(),
            view: View::Search,
            next_query_id: 1,
            latest_query_id: 0,
            search_pending: false,
            search_min_chars: 2,
            help_open: false,
            keymap: KeyMap::default(),
            dropdown_state: ListState::default(),
            details_scroll: 0,
            input_rect: None,
            dropdown_rect: None,
        }
    }
}

impl AppState {
    /// Fresh state using the given key bindings.
    #[must_use]
    pub fn with_keymap(keymap: KeyMap) -> Self {
        Self {
            keymap,
            ..Self::default()
        }
    }

    /// Switch to the detail view for `key` in the loading state.
    pub fn open_details(&mut self, key: DetailKey) {
        self.view = View::Details {
            key,
            status: DetailStatus::Loading,
        };
        self.details_scroll = 0;
        self.help_open = false;
    }

    /// What: Apply a finished detail fetch.
    ///
    /// Details:
    /// - Ignored unless the detail view still shows `key`.
    pub fn apply_details(&mut self, key: DetailKey, result: Result<DetailRecord, String>) {
        if let View::Details { key: shown, status } = &mut self.view
            && *shown == key
        {
            *status = match result {
                Ok(rec) => DetailStatus::Loaded(rec),
                Err(msg) => DetailStatus::Error(msg),
            };
        }
    }

    /// Return to the search view, keeping the query and suggestions.
    pub fn back_to_search(&mut self) {
        self.view = View::Search;
        self.details_scroll = 0;
    }

    /// Sync the list selection with the navigator's active row.
    pub fn sync_dropdown_selection(&mut self) {
        self.dropdown_state.select(self.navigator.active_row());
    }
}
