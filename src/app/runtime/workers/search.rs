use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::sources::ApiService;
use crate::state::{QueryInput, SearchResults};

/// What: Spawn the debounced search worker.
///
/// Inputs:
/// - `api`: Shared service (cache + fetcher).
/// - `query_rx`: Incoming queries with monotonic ids.
/// - `search_result_tx`: Results tagged with the originating id.
/// - `debounce`: Quiet period after the latest query before searching.
///
/// Details:
/// - Only the latest pending query is kept; each new one restarts the timer.
/// - The search itself runs on a spawned task so typing never waits on the network.
/// - Stale results are still sent; the main loop discards them by id.
pub fn spawn_search_worker(
    api: Arc<ApiService>,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    search_result_tx: mpsc::UnboundedSender<SearchResults>,
    debounce: Duration,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(debounce) => { break; }
                }
            }
            tracing::debug!(id = latest.id, query = %latest.text, "debounced query fired");
            let api = Arc::clone(&api);
            let tx = search_result_tx.clone();
            tokio::spawn(async move {
                let items = api.search_all(&latest.text).await;
                let _ = tx.send(SearchResults {
                    id: latest.id,
                    items,
                });
            });
        }
    });
}
