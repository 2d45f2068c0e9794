//! Background workers fed by the main loop's channels.

pub mod details;
pub mod search;

pub use details::spawn_details_worker;
pub use search::spawn_search_worker;
