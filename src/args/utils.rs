//! Shared utilities for argument processing.

use crate::state::{Category, DetailKey};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse a `TYPE ID` pair into a detail key.
///
/// Inputs:
/// - `kind`: Category slug (aliases `location` and `machine` accepted).
/// - `id`: Positive numeric id.
///
/// Output:
/// - `Ok(DetailKey)` or a user-facing error message.
pub fn parse_detail_target(kind: &str, id: &str) -> Result<DetailKey, String> {
    let category = Category::from_slug(kind).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
        format!("Unknown type '{kind}' (expected one of: {})", known.join(", "))
    })?;
    let id = id
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Invalid id '{id}' (expected a positive number)"))?;
    Ok(DetailKey { category, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Valid pairs parse; unknown types and bad ids are rejected with a message.
    fn parse_detail_target_cases() {
        assert_eq!(
            parse_detail_target("Pokemon", "25"),
            Ok(DetailKey {
                category: Category::Pokemon,
                id: 25
            })
        );
        assert_eq!(
            parse_detail_target("machine", "8").map(|k| k.category),
            Ok(Category::Tm)
        );
        assert!(
            parse_detail_target("berry", "1")
                .expect_err("unknown type")
                .contains("Unknown type")
        );
        assert!(parse_detail_target("item", "0").is_err());
        assert!(parse_detail_target("item", "abc").is_err());
    }
}
