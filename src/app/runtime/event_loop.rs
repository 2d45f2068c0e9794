use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::handle_event;
use crate::logic::apply_search_results;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// Terminal type driven by the main loop.
pub type Term = Terminal<CrosstermBackend<std::io::Stdout>>;

/// What: Drive rendering and channel handling until exit is requested.
///
/// Inputs:
/// - `app`: Application state owned by the loop.
/// - `channels`: Runtime channels (receivers are polled here).
/// - `terminal`: `None` in headless mode; no frames are drawn then.
///
/// Details:
/// - Redraws once per handled message.
/// - Returns when an exit binding is pressed or every input source has closed.
pub async fn run_event_loop(
    app: &mut AppState,
    channels: &mut Channels,
    mut terminal: Option<&mut Term>,
) {
    loop {
        if let Some(t) = terminal.as_deref_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, app, &channels.query_tx, &channels.details_req_tx) {
                    tracing::info!("exit requested");
                    break;
                }
            }
            Some(results) = channels.results_rx.recv() => {
                let count = results.items.len();
                if apply_search_results(app, results) {
                    tracing::debug!(results = count, "applied search results");
                }
            }
            Some(outcome) = channels.details_res_rx.recv() => {
                app.apply_details(outcome.key, outcome.result);
            }
            else => break,
        }
    }
}
