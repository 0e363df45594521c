//! Error types for board generation.

use thiserror::Error;

/// Errors raised while generating a board.
///
/// Placement overflow and missing pictograms are not errors: they are logged
/// and the board is still produced.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Malformed button count, percentages or word lists.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The word generator failed or returned nothing usable.
    #[error("word generation failed for {category}: {message}")]
    UpstreamGeneration {
        /// Category (or "suggestions") the request was for
        category: String,
        /// What went wrong
        message: String,
    },

    /// A pictogram lookup failed at the transport level.
    #[error("pictogram lookup failed: {0}")]
    Pictogram(String),

    /// Configuration is unusable (e.g., missing API key).
    #[error("configuration error: {0}")]
    Config(String),
}

impl BoardError {
    /// Shorthand for [`BoardError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Shorthand for [`BoardError::UpstreamGeneration`].
    pub fn upstream(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamGeneration {
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Result alias for board generation.
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BoardError::invalid_input("total buttons must be positive");
        assert_eq!(err.to_string(), "invalid input: total buttons must be positive");

        let err = BoardError::upstream("Actions", "empty response");
        assert_eq!(err.to_string(), "word generation failed for Actions: empty response");
    }
}
