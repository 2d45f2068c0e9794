use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::ApiService;
use crate::state::AppState;
use crate::theme::Settings;
use crate::util::is_headless;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod workers;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::run_event_loop;
use workers::{spawn_details_worker, spawn_search_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the pokesearch TUI end-to-end.
///
/// Inputs:
/// - `settings`: Loaded settings (keymap, debounce, search limits).
/// - `api`: Shared service used by the search and details workers.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or restore failures.
///
/// Details:
/// - Headless mode (`POKESEARCH_TEST_HEADLESS=1`) skips terminal setup, the
///   event reader thread and drawing; the loop still services worker channels.
/// - The terminal is restored even when the loop ends early.
pub async fn run(settings: Settings, api: Arc<ApiService>) -> Result<()> {
    let headless = is_headless();
    tracing::info!(headless, base_url = %settings.api_base_url, "starting TUI");

    let mut terminal = if headless {
        None
    } else {
        setup_terminal()?;
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState::with_keymap(settings.keymap.clone());
    app.search_min_chars = settings.search_min_chars;

    let mut channels = Channels::new();
    if let Some(query_rx) = channels.query_rx.take() {
        spawn_search_worker(
            Arc::clone(&api),
            query_rx,
            channels.search_result_tx.clone(),
            Duration::from_millis(settings.search_debounce_ms),
        );
    }
    if let Some(details_req_rx) = channels.details_req_rx.take() {
        spawn_details_worker(
            Arc::clone(&api),
            details_req_rx,
            channels.details_res_tx.clone(),
        );
    }
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    run_event_loop(&mut app, &mut channels, terminal.as_mut()).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if terminal.is_some() {
        restore_terminal()?;
        if let Some(t) = terminal.as_mut() {
            let _ = t.show_cursor();
        }
    }
    tracing::info!("TUI stopped");
    Ok(())
}
