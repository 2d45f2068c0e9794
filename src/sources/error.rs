//! Error taxonomy for upstream API access.

use crate::state::Category;

/// Failure raised by the remote data gateway or a detail formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network failure or a non-success status other than 404.
    #[error("API error: {0}")]
    Transport(String),
    /// Response body was not the JSON we expected.
    #[error("Malformed response: {0}")]
    Decode(String),
    /// The requested entity does not exist upstream.
    #[error("No {category} found with ID {id}")]
    NotFound {
        /// Category that was requested.
        category: Category,
        /// Identifier that was requested.
        id: u32,
    },
    /// A followed cross-reference answered 404.
    #[error("Resource not found: {0}")]
    NotFoundUrl(String),
}

impl ApiError {
    /// What: Attach the requested `(category, id)` to a bare 404.
    ///
    /// Inputs:
    /// - `category`, `id`: Address of the primary entity being fetched.
    ///
    /// Output:
    /// - `NotFound { .. }` when `self` is `NotFoundUrl`; otherwise `self` unchanged.
    ///
    /// Details:
    /// - Only the primary entity fetch should call this; 404s on followed
    ///   references keep their URL so logs show which hop failed.
    #[must_use]
    pub fn for_entity(self, category: Category, id: u32) -> Self {
        match self {
            Self::NotFoundUrl(_) => Self::NotFound { category, id },
            other => other,
        }
    }

    /// `true` for either flavor of not-found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotFoundUrl(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The not-found message matches what the detail view shows.
    fn not_found_message_names_type_and_id() {
        let e = ApiError::NotFoundUrl("https://x/pokemon/9999/".into())
            .for_entity(Category::Pokemon, 9999);
        assert_eq!(e.to_string(), "No pokemon found with ID 9999");
        assert!(e.is_not_found());
    }

    #[test]
    /// What: Transport errors pass through `for_entity` untouched.
    fn transport_error_is_not_rewritten() {
        let e = ApiError::Transport("500".into()).for_entity(Category::Item, 1);
        assert_eq!(e, ApiError::Transport("500".into()));
    }
}
