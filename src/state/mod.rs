//! Application state: value types, the suggestion navigator and `AppState`.

pub mod app_state;
pub mod navigator;
pub mod types;

pub use app_state::{AppState, DetailStatus, View};
pub use navigator::{NavOutcome, Section, SuggestionNavigator, group_sections};
pub use types::{
    BaseStats, Category, DetailKey, DetailRecord, DetailsOutcome, QueryInput, SearchResults,
    SuggestionItem,
};
