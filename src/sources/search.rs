//! Cross-category typeahead search.

use futures::future::try_join_all;

use super::service::ApiService;
use crate::state::{Category, SuggestionItem};

/// What: Keep the first `limit` suggestions whose name contains `needle_lower`.
///
/// Inputs:
/// - `list`: Category list in upstream order.
/// - `needle_lower`: Already lower-cased query.
/// - `limit`: Maximum number of matches kept.
///
/// Output:
/// - Matching items in their original order.
#[must_use]
pub fn filter_suggestions(
    list: &[SuggestionItem],
    needle_lower: &str,
    limit: usize,
) -> Vec<SuggestionItem> {
    list.iter()
        .filter(|it| it.name.to_lowercase().contains(needle_lower))
        .take(limit)
        .cloned()
        .collect()
}

impl ApiService {
    /// What: Search every category list for names containing `query`.
    ///
    /// Inputs:
    /// - `query`: Raw user input.
    ///
    /// Output:
    /// - Up to `per_category_limit` matches per category, concatenated in
    ///   [`Category::ALL`] order.
    /// - Empty when the trimmed query is shorter than `min_query_chars`
    ///   (no network access) or when any category list fails to load.
    ///
    /// Details:
    /// - The six lists are fetched concurrently through the cache.
    /// - Matching uses the lower-cased query as typed; only the length check trims.
    pub async fn search_all(&self, query: &str) -> Vec<SuggestionItem> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.min_query_chars {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let lists = match try_join_all(Category::ALL.map(|c| self.get_list(c))).await {
            Ok(lists) => lists,
            Err(e) => {
                tracing::error!(query = %trimmed, error = %e, "search aggregation failed");
                return Vec::new();
            }
        };
        let items: Vec<SuggestionItem> = lists
            .iter()
            .flat_map(|list| filter_suggestions(list, &needle, self.per_category_limit))
            .collect();
        tracing::debug!(query = %trimmed, results = items.len(), "search complete");
        items
    }
}
