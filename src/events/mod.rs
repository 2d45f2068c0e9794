//! Event handling layer for the pokesearch TUI.
//!
//! `handle_event` applies global bindings (help overlay, exit) and then
//! delegates to the handler for the current view or to the mouse handler.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, DetailKey, QueryInput, View};
use crate::theme::KeyMap;

mod details;
mod mouse;
mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event.
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the debounced search worker.
/// - `details_tx`: Channel to the details worker.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    details_tx: &mpsc::UnboundedSender<DetailKey>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if KeyMap::any(&app.keymap.exit, ke.code, ke.modifiers) {
                return true;
            }
            if app.help_open {
                if matches!(ke.code, KeyCode::Esc | KeyCode::Enter)
                    || KeyMap::any(&app.keymap.help_overlay, ke.code, ke.modifiers)
                {
                    app.help_open = false;
                }
                return false;
            }
            if KeyMap::any(&app.keymap.help_overlay, ke.code, ke.modifiers) {
                app.help_open = true;
                return false;
            }
            match app.view {
                View::Search => search::handle_search_key(ke, app, query_tx, details_tx),
                View::Details { .. } => details::handle_details_key(ke, app),
            }
            false
        }
        CEvent::Mouse(m) => {
            if !app.help_open {
                mouse::handle_mouse_event(m, app, details_tx);
            }
            false
        }
        _ => false,
    }
}
