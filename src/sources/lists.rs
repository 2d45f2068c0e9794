//! Category listing fetchers.

use futures::future::join_all;
use serde_json::Value;

use super::error::ApiError;
use super::format::{format_name, id_from_url, tm_display_name};
use super::service::ApiService;
use crate::state::{Category, SuggestionItem};
use crate::util::s;

/// Machines resolved per TM listing; each costs three requests.
const TM_RESOLVE_LIMIT: usize = 50;

/// What: Fetch the listing endpoint for `category` and build suggestions.
///
/// Output:
/// - Suggestions in upstream order; entries without a parseable id are skipped.
pub(super) async fn fetch_list(
    api: &ApiService,
    category: Category,
) -> Result<Vec<SuggestionItem>, ApiError> {
    let url = api.endpoint(&format!(
        "{}?limit={}",
        category.resource(),
        category.list_limit()
    ));
    let data = api.fetch(&url).await?;
    let results = data
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::Decode(format!("{url}: missing results")))?;

    if category == Category::Tm {
        return Ok(resolve_machines(api, results).await);
    }

    Ok(results
        .iter()
        .filter_map(|entry| {
            let id = id_from_url(&s(entry, "url"))?;
            Some(SuggestionItem {
                id,
                name: format_name(&s(entry, "name")),
                category,
            })
        })
        .collect())
}

/// What: Turn raw machine references into TM suggestions.
///
/// Inputs:
/// - `results`: Raw `{url}` entries from the machine listing.
///
/// Output:
/// - TM suggestions for the first [`TM_RESOLVE_LIMIT`] machines, in listing order.
///
/// Details:
/// - Machines are resolved concurrently; a failure or a non-TM machine (HM, TR)
///   drops that entry only.
async fn resolve_machines(api: &ApiService, results: &[Value]) -> Vec<SuggestionItem> {
    let pending = results
        .iter()
        .take(TM_RESOLVE_LIMIT)
        .map(|entry| async move {
            let url = s(entry, "url");
            match resolve_machine(api, &url).await {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "error fetching machine details");
                    None
                }
            }
        });
    join_all(pending).await.into_iter().flatten().collect()
}

/// What: Resolve one machine reference to a TM suggestion.
///
/// Output:
/// - `Ok(Some(item))` for TMs, `Ok(None)` for other machines, `Err` on fetch failure.
async fn resolve_machine(api: &ApiService, url: &str) -> Result<Option<SuggestionItem>, ApiError> {
    let id = id_from_url(url).ok_or_else(|| ApiError::Decode(format!("bad machine url {url}")))?;
    let machine = api.fetch(url).await?;
    let move_data = api.follow(&machine, "/move/url").await?;
    let item_data = api.follow(&machine, "/item/url").await?;
    let item_name = s(&item_data, "name");
    if !item_name.to_lowercase().contains("tm") {
        return Ok(None);
    }
    Ok(Some(SuggestionItem {
        id,
        name: tm_display_name(&item_name, &s(&move_data, "name")),
        category: Category::Tm,
    }))
}
