use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::ApiService;
use crate::state::{DetailKey, DetailsOutcome};

/// What: Spawn the worker that loads detail records.
///
/// Inputs:
/// - `api`: Shared service; details are cached after the first load.
/// - `details_req_rx`: Requested `(category, id)` keys.
/// - `details_res_tx`: Outcomes with a user-facing error message on failure.
///
/// Details:
/// - Each request runs on its own task; the main loop ignores outcomes for
///   keys that are no longer shown.
pub fn spawn_details_worker(
    api: Arc<ApiService>,
    mut details_req_rx: mpsc::UnboundedReceiver<DetailKey>,
    details_res_tx: mpsc::UnboundedSender<DetailsOutcome>,
) {
    tokio::spawn(async move {
        while let Some(key) = details_req_rx.recv().await {
            let api = Arc::clone(&api);
            let tx = details_res_tx.clone();
            tokio::spawn(async move {
                let result = api
                    .get_details(key.category, key.id)
                    .await
                    .map_err(|e| {
                        tracing::error!(category = %key.category, id = key.id, error = %e, "details fetch failed");
                        e.to_string()
                    });
                let _ = tx.send(DetailsOutcome { key, result });
            });
        }
    });
}
