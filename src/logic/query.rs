use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

/// What: Send the current query text over the search channel with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id` and `latest_query_id`
/// - `query_tx`: Channel to the debounced search worker
///
/// Output:
/// - Sends a `QueryInput` with the new id and current text; marks a search as pending.
///
/// Details:
/// - The id lets the main loop discard results from superseded queries.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.search_pending = true;
    let _ = query_tx.send(QueryInput {
        id,
        text: app.navigator.query().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: Ensure `send_query` increments identifiers and forwards the current query text.
    ///
    /// Inputs:
    /// - `AppState` whose navigator query is `"pika"`.
    ///
    /// Output:
    /// - `latest_query_id` advances on each send and the channel receives matching inputs.
    async fn send_query_increments_and_sends() {
        let mut app = AppState::default();
        app.navigator.set_query("pika");
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx);
        send_query(&mut app, &tx);
        assert_eq!(app.latest_query_id, 2);
        assert!(app.search_pending);
        let first = rx.recv().await.expect("first query");
        let second = rx.recv().await.expect("second query");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.text, "pika");
    }
}
