//! Shared fixtures for integration tests: an in-memory fetcher and canned
//! PokéAPI bodies.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pokesearch::sources::{ApiError, ApiService, JsonFetcher};
use pokesearch::theme::Settings;
use serde_json::{Value, json};

pub const BASE: &str = "http://stub/api/v2";

/// Canned JSON by URL, with call counting and injectable failures.
#[derive(Default)]
pub struct Stub {
    routes: HashMap<String, Value>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl Stub {
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(url(path), body);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(url(path));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for Stub {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(url) {
            return Err(ApiError::Transport(format!("stubbed failure for {url}")));
        }
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFoundUrl(url.to_string()))
    }
}

/// Absolute stub URL for `path`.
pub fn url(path: &str) -> String {
    format!("{BASE}/{path}")
}

pub fn api(stub: Stub) -> (ApiService, Arc<Stub>) {
    let stub = Arc::new(stub);
    let settings = Settings {
        api_base_url: BASE.to_string(),
        ..Settings::default()
    };
    let api = ApiService::new(Arc::clone(&stub) as Arc<dyn JsonFetcher>, &settings);
    (api, stub)
}

/// Listing body whose entries get ids 1..=n.
pub fn listing(resource: &str, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| json!({ "name": n, "url": url(&format!("{resource}/{}/", i + 1)) }))
        .collect();
    json!({ "results": results })
}

/// Machine listing whose entries point at `machine/<id>/`.
pub fn machine_listing(ids: &[u32]) -> Value {
    let results: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "url": url(&format!("machine/{id}/")) }))
        .collect();
    json!({ "results": results })
}

/// A stub holding all six category lists.
///
/// Pokémon: 8 names containing "sa" plus others; TMs resolve through
/// machines 1 (TM08 Body Slam) and 2 (HM01 Cut, dropped).
pub fn all_lists() -> Stub {
    Stub::default()
        .with(
            "pokemon?limit=151",
            listing(
                "pokemon",
                &[
                    "bulbasaur",
                    "ivysaur",
                    "venusaur",
                    "charmander",
                    "sandshrew",
                    "sandslash",
                    "psyduck",
                    "sawk",
                    "sawsbuck",
                ],
            ),
        )
        .with(
            "location?limit=50",
            listing("location", &["kanto-route-1", "safari-zone"]),
        )
        .with("item?limit=50", listing("item", &["potion", "safari-ball"]))
        .with(
            "ability?limit=100",
            listing("ability", &["stench", "sand-veil"]),
        )
        .with("nature?limit=25", listing("nature", &["hardy", "sassy"]))
        .with("machine?limit=100", machine_listing(&[1, 2]))
        .with(
            "machine/1/",
            json!({
                "item": { "name": "tm08", "url": url("item/312/") },
                "move": { "name": "body-slam", "url": url("move/34/") }
            }),
        )
        .with("item/312/", json!({ "name": "tm08" }))
        .with("move/34/", json!({ "name": "body-slam" }))
        .with(
            "machine/2/",
            json!({
                "item": { "name": "hm01", "url": url("item/420/") },
                "move": { "name": "cut", "url": url("move/15/") }
            }),
        )
        .with("item/420/", json!({ "name": "hm01" }))
        .with("move/15/", json!({ "name": "cut" }))
}
