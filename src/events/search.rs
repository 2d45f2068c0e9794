use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{handle_outcome, send_query};
use crate::state::{AppState, DetailKey, QueryInput};

/// What: Replace the query text and dispatch a new search.
fn update_query(
    app: &mut AppState,
    text: String,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    app.navigator.set_query(text);
    send_query(app, query_tx);
}

/// What: Handle a key press while the search view is shown.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses).
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the debounced search worker.
/// - `details_tx`: Channel to the details worker.
///
/// Details:
/// - Printable characters and Backspace edit the query; Ctrl+U clears it.
/// - Up/Down/Enter/Esc drive the suggestion navigator.
pub(super) fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    details_tx: &mpsc::UnboundedSender<DetailKey>,
) {
    let plain = !ke
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            update_query(app, String::new(), query_tx);
        }
        KeyCode::Char(ch) if plain => {
            let mut text = app.navigator.query().to_string();
            text.push(ch);
            update_query(app, text, query_tx);
        }
        KeyCode::Backspace => {
            let mut text = app.navigator.query().to_string();
            if text.pop().is_some() {
                update_query(app, text, query_tx);
            }
        }
        KeyCode::Down => {
            app.navigator.arrow_down();
            app.sync_dropdown_selection();
        }
        KeyCode::Up => {
            app.navigator.arrow_up();
            app.sync_dropdown_selection();
        }
        KeyCode::Enter => {
            let outcome = app.navigator.enter();
            handle_outcome(app, outcome, details_tx);
        }
        KeyCode::Esc => {
            app.navigator.escape();
            app.sync_dropdown_selection();
        }
        _ => {}
    }
}
