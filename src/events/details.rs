use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;
use crate::theme::KeyMap;

/// Rows moved per PageUp/PageDown.
const PAGE: u16 = 10;

/// What: Handle a key press while the detail view is shown.
///
/// Details:
/// - Back bindings return to search and reopen the dropdown when it has content.
/// - Arrow and page keys scroll the body.
pub(super) fn handle_details_key(ke: KeyEvent, app: &mut AppState) {
    if KeyMap::any(&app.keymap.back, ke.code, ke.modifiers) {
        app.back_to_search();
        app.navigator.focus();
        return;
    }
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.details_scroll = app.details_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.details_scroll = app.details_scroll.saturating_sub(1);
        }
        KeyCode::PageDown => app.details_scroll = app.details_scroll.saturating_add(PAGE),
        KeyCode::PageUp => app.details_scroll = app.details_scroll.saturating_sub(PAGE),
        KeyCode::Home => app.details_scroll = 0,
        _ => {}
    }
}
