//! `ApiService`: the cache-aware facade over the remote data gateway.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::cache::CategoryCache;
use super::error::ApiError;
use super::fetch::JsonFetcher;
use super::{details, lists};
use crate::state::{Category, DetailRecord, SuggestionItem};
use crate::theme::Settings;

/// Single owned cache + fetcher instance shared by the workers.
///
/// Construct once at startup and hand out as `Arc<ApiService>`; the cache
/// lives for the rest of the process.
pub struct ApiService {
    /// Transport used for every upstream request.
    fetcher: Arc<dyn JsonFetcher>,
    /// Base URL without trailing slash.
    base_url: String,
    /// Per-category lists and details. Never held across a network await.
    cache: Mutex<CategoryCache>,
    /// Minimum trimmed query length for `search_all`.
    pub(super) min_query_chars: usize,
    /// Maximum suggestions kept per category.
    pub(super) per_category_limit: usize,
}

impl ApiService {
    /// What: Build a service from settings.
    ///
    /// Inputs:
    /// - `fetcher`: Transport implementation.
    /// - `settings`: Supplies base URL, list TTL and search limits.
    #[must_use]
    pub fn new(fetcher: Arc<dyn JsonFetcher>, settings: &Settings) -> Self {
        Self {
            fetcher,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            cache: Mutex::new(CategoryCache::new(Duration::from_secs(
                settings.cache_ttl_secs,
            ))),
            min_query_chars: settings.search_min_chars,
            per_category_limit: settings.search_per_category_limit,
        }
    }

    /// Absolute URL for a path relative to the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Per-entity URL, e.g. `<base>/pokemon/25`.
    #[must_use]
    pub fn entity_url(&self, category: Category, id: u32) -> String {
        self.endpoint(&format!("{}/{id}", category.resource()))
    }

    /// Fetch an absolute URL through the configured transport.
    pub(super) async fn fetch(&self, url: &str) -> Result<Value, ApiError> {
        self.fetcher.get_json(url).await
    }

    /// What: Follow a cross-reference embedded in a response.
    ///
    /// Inputs:
    /// - `v`: Response holding the reference.
    /// - `pointer`: JSON pointer to the `url` string (e.g. `/species/url`).
    ///
    /// Output:
    /// - The referenced document, or `ApiError::Decode` when the reference is missing.
    pub(super) async fn follow(&self, v: &Value, pointer: &str) -> Result<Value, ApiError> {
        let url = v
            .pointer(pointer)
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Decode(format!("missing reference at {pointer}")))?;
        self.fetch(url).await
    }

    /// What: Return the suggestion list for a category, refetching when stale.
    ///
    /// Inputs:
    /// - `category`: Which list to return.
    ///
    /// Output:
    /// - The cached list while fresh (no network access); otherwise a freshly fetched list.
    ///
    /// Details:
    /// - The timestamp recorded is the instant the call started.
    /// - Concurrent stale callers each refetch; the last writer wins.
    pub async fn get_list(&self, category: Category) -> Result<Vec<SuggestionItem>, ApiError> {
        let now = Instant::now();
        if let Some(list) = self.cache.lock().await.fresh_list(category, now) {
            tracing::debug!(category = %category, items = list.len(), "list cache hit");
            return Ok(list);
        }
        let list = lists::fetch_list(self, category).await?;
        tracing::info!(category = %category, items = list.len(), "fetched category list");
        self.cache
            .lock()
            .await
            .store_list(category, list.clone(), now);
        Ok(list)
    }

    /// What: Return the formatted detail record for `(category, id)`.
    ///
    /// Output:
    /// - Cached record when present; otherwise fetched, formatted, cached and returned.
    /// - `ApiError::NotFound` when the entity does not exist upstream.
    pub async fn get_details(
        &self,
        category: Category,
        id: u32,
    ) -> Result<DetailRecord, ApiError> {
        if let Some(rec) = self.cache.lock().await.detail(category, id) {
            tracing::debug!(category = %category, id, "details cache hit");
            return Ok(rec);
        }
        let rec = details::fetch_details(self, category, id).await?;
        self.cache
            .lock()
            .await
            .store_detail(category, id, rec.clone());
        Ok(rec)
    }

    /// When the list for `category` was last stored.
    pub async fn list_fetched_at(&self, category: Category) -> Option<Instant> {
        self.cache.lock().await.fetched_at(category)
    }
}
