//! PokéAPI data layer: transport, category cache, list fetchers, detail
//! formatters and the cross-category search.

mod cache;
mod details;
mod error;
mod fetch;
pub mod format;
mod lists;
mod search;
mod service;

pub use cache::{CategoryCache, DEFAULT_LIST_TTL};
pub use details::{NO_ROUTE_POKEMON, base_stats};
pub use error::ApiError;
pub use fetch::{HttpFetcher, JsonFetcher};
pub use format::{format_name, id_from_url, sanitize_text, tm_display_name};
pub use search::filter_suggestions;
pub use service::ApiService;
