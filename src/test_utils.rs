//! Test utilities for common test setup.
//!
//! `StubFetcher` serves canned JSON by URL and counts calls, so cache and
//! worker behavior can be asserted without a network. Failure injection
//! lives in the integration-test stub under `tests/common`.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::sources::{ApiError, ApiService, JsonFetcher};
use crate::theme::Settings;

/// Base URL used by every stubbed service.
pub const BASE: &str = "http://stub/api/v2";

/// In-memory `JsonFetcher`.
#[derive(Default)]
pub struct StubFetcher {
    /// Canned responses keyed by absolute URL.
    routes: HashMap<String, Value>,
    /// Total `get_json` calls.
    calls: AtomicUsize,
}

impl StubFetcher {
    /// Serve `body` for `path` (relative to [`BASE`]).
    #[must_use]
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(format!("{BASE}/{path}"), body);
        self
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for StubFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFoundUrl(url.to_string()))
    }
}

/// What: Build a service over `stub` with default settings and [`BASE`].
///
/// Output:
/// - The service plus a handle to the stub for call counting.
pub fn service(stub: StubFetcher) -> (ApiService, Arc<StubFetcher>) {
    let stub = Arc::new(stub);
    let settings = Settings {
        api_base_url: BASE.to_string(),
        ..Settings::default()
    };
    let api = ApiService::new(Arc::clone(&stub) as Arc<dyn JsonFetcher>, &settings);
    (api, stub)
}

/// Listing body with `{name, url}` entries for `resource`.
pub fn listing(resource: &str, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            serde_json::json!({
                "name": n,
                "url": format!("{BASE}/{resource}/{}/", i + 1)
            })
        })
        .collect();
    serde_json::json!({ "results": results })
}
