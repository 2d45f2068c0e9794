use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{DetailKey, DetailsOutcome, QueryInput, SearchResults};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders and receivers used between the main event loop and the
///   terminal event thread and background workers.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Main-loop side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Queries to the debounced search worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Search worker side of `query_tx`; taken when the worker spawns.
    pub query_rx: Option<mpsc::UnboundedReceiver<QueryInput>>,
    /// Worker results tagged with their query id.
    pub search_result_tx: mpsc::UnboundedSender<SearchResults>,
    /// Main-loop side of `search_result_tx`.
    pub results_rx: mpsc::UnboundedReceiver<SearchResults>,
    /// Detail requests to the details worker.
    pub details_req_tx: mpsc::UnboundedSender<DetailKey>,
    /// Details worker side of `details_req_tx`; taken when the worker spawns.
    pub details_req_rx: Option<mpsc::UnboundedReceiver<DetailKey>>,
    /// Formatted records or error messages.
    pub details_res_tx: mpsc::UnboundedSender<DetailsOutcome>,
    /// Main-loop side of `details_res_tx`.
    pub details_res_rx: mpsc::UnboundedReceiver<DetailsOutcome>,
}

impl Channels {
    /// Create every channel pair.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (search_result_tx, results_rx) = mpsc::unbounded_channel();
        let (details_req_tx, details_req_rx) = mpsc::unbounded_channel();
        let (details_res_tx, details_res_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            query_rx: Some(query_rx),
            search_result_tx,
            results_rx,
            details_req_tx,
            details_req_rx: Some(details_req_rx),
            details_res_tx,
            details_res_rx,
        }
    }
}
