//! Command-line search mode.

use crate::sources::ApiService;
use crate::state::SuggestionItem;

/// What: Render suggestions as aligned text lines.
///
/// Output:
/// - One `type  id  name` line per suggestion; a notice when empty.
#[must_use]
pub fn format_suggestions(items: &[SuggestionItem]) -> String {
    if items.is_empty() {
        return "No matches.".to_string();
    }
    items
        .iter()
        .map(|it| format!("{:<8} {:>5}  {}", it.category.slug(), it.id, it.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What: Handle command-line search mode.
///
/// Inputs:
/// - `api`: Service used for the search.
/// - `query`: Query text.
/// - `json`: Emit a JSON array instead of text.
///
/// Output:
/// - Process exit code: 0 on success, 1 when output cannot be produced.
///
/// Details:
/// - Upstream failures degrade to an empty result, as in the TUI.
pub async fn handle_search(api: &ApiService, query: &str, json: bool) -> i32 {
    tracing::info!(query = %query, "search mode requested from CLI");
    let items = api.search_all(query).await;
    if json {
        match serde_json::to_string_pretty(&items) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode results: {e}");
                return 1;
            }
        }
    } else {
        println!("{}", format_suggestions(&items));
    }
    0
}
