//! Command-line argument parsing and the non-interactive modes.

pub mod definition;
pub mod details;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use utils::determine_log_level;
