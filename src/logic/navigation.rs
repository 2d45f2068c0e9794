use tokio::sync::mpsc;

use crate::state::{AppState, DetailKey, NavOutcome, SearchResults};

/// What: Apply search results unless a newer query has been sent since.
///
/// Inputs:
/// - `app`: Application state.
/// - `results`: Worker output tagged with its query id.
///
/// Output:
/// - `true` when the results were applied, `false` when they were stale.
pub fn apply_search_results(app: &mut AppState, results: SearchResults) -> bool {
    if results.id != app.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_query_id,
            "dropping stale search results"
        );
        return false;
    }
    app.search_pending = false;
    app.navigator.set_suggestions(results.items);
    app.sync_dropdown_selection();
    true
}

/// What: Act on a navigator outcome.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Result of a navigator transition.
/// - `details_tx`: Channel to the details worker.
///
/// Details:
/// - A commit switches to the loading detail view and requests the record.
pub fn handle_outcome(
    app: &mut AppState,
    outcome: NavOutcome,
    details_tx: &mpsc::UnboundedSender<DetailKey>,
) {
    app.sync_dropdown_selection();
    let NavOutcome::Commit(item) = outcome else {
        return;
    };
    let key = DetailKey {
        category: item.category,
        id: item.id,
    };
    tracing::info!(category = %key.category, id = key.id, name = %item.name, "opening details");
    app.open_details(key);
    let _ = details_tx.send(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, DetailStatus, SuggestionItem, View};

    fn pikachu() -> SuggestionItem {
        SuggestionItem {
            id: 25,
            name: "Pikachu".into(),
            category: Category::Pokemon,
        }
    }

    #[test]
    /// What: Only results for the latest query id reach the navigator.
    fn stale_results_are_dropped() {
        let mut app = AppState {
            latest_query_id: 3,
            ..AppState::default()
        };
        assert!(!apply_search_results(
            &mut app,
            SearchResults {
                id: 2,
                items: vec![pikachu()]
            }
        ));
        assert!(app.navigator.suggestions().is_empty());
        assert!(apply_search_results(
            &mut app,
            SearchResults {
                id: 3,
                items: vec![pikachu()]
            }
        ));
        assert_eq!(app.navigator.suggestions().len(), 1);
    }

    #[tokio::test]
    /// What: A commit opens the loading detail view and requests the record.
    async fn commit_requests_details() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_outcome(&mut app, NavOutcome::None, &tx);
        assert_eq!(app.view, View::Search);
        handle_outcome(&mut app, NavOutcome::Commit(pikachu()), &tx);
        let key = DetailKey {
            category: Category::Pokemon,
            id: 25,
        };
        assert_eq!(
            app.view,
            View::Details {
                key,
                status: DetailStatus::Loading
            }
        );
        assert_eq!(rx.recv().await, Some(key));
    }
}
