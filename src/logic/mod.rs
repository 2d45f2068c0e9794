//! Core non-UI logic split into modules: query dispatch and navigation outcomes.

pub mod navigation;
pub mod query;

pub use navigation::{apply_search_results, handle_outcome};
pub use query::send_query;
