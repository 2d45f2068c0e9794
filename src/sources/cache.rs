//! Per-category in-memory cache (list with TTL, details without eviction).
use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::state::{Category, DetailRecord, SuggestionItem};

/// Default freshness window for category lists (5 minutes).
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(300);

/// Cached state for one category.
#[derive(Debug, Default)]
struct CategoryEntry {
    /// Last fetched list, if any.
    list: Option<Vec<SuggestionItem>>,
    /// When `list` was fetched.
    fetched_at: Option<Instant>,
    /// Formatted details by id; never expire.
    details: HashMap<u32, DetailRecord>,
}

/// Cache for all six categories.
///
/// Uses `tokio::time::Instant` so tests can drive the TTL with a paused clock.
#[derive(Debug)]
pub struct CategoryCache {
    /// One entry per category, created lazily.
    entries: HashMap<Category, CategoryEntry>,
    /// List freshness window.
    ttl: Duration,
}

impl CategoryCache {
    /// Empty cache with the given list TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Configured list TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// What: Return the cached list for `category` if it is still fresh.
    ///
    /// Inputs:
    /// - `category`: Category to look up.
    /// - `now`: Current instant.
    ///
    /// Output:
    /// - Cloned list when `now - fetched_at < ttl`; `None` when absent or stale.
    #[must_use]
    pub fn fresh_list(&self, category: Category, now: Instant) -> Option<Vec<SuggestionItem>> {
        let entry = self.entries.get(&category)?;
        let list = entry.list.as_ref()?;
        let fetched_at = entry.fetched_at?;
        if now.saturating_duration_since(fetched_at) < self.ttl {
            Some(list.clone())
        } else {
            None
        }
    }

    /// Replace the list and timestamp for `category`.
    pub fn store_list(&mut self, category: Category, list: Vec<SuggestionItem>, now: Instant) {
        let entry = self.entries.entry(category).or_default();
        entry.list = Some(list);
        entry.fetched_at = Some(now);
    }

    /// Timestamp of the last stored list.
    #[must_use]
    pub fn fetched_at(&self, category: Category) -> Option<Instant> {
        self.entries.get(&category).and_then(|e| e.fetched_at)
    }

    /// Cached detail record, if any.
    #[must_use]
    pub fn detail(&self, category: Category, id: u32) -> Option<DetailRecord> {
        self.entries
            .get(&category)
            .and_then(|e| e.details.get(&id))
            .cloned()
    }

    /// Remember a formatted detail record for the rest of the process lifetime.
    pub fn store_detail(&mut self, category: Category, id: u32, record: DetailRecord) {
        self.entries
            .entry(category)
            .or_default()
            .details
            .insert(id, record);
    }
}

impl Default for CategoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_TTL)
    }
}
