//! Traits and errors for the match engine.

use thiserror::Error;

/// Errors returned by match engine queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Corpus contains no quotes")]
    EmptyCorpus,

    #[error("Invalid match settings: {0}")]
    InvalidSettings(String),
}

/// Source of randomness for picking quotes.
///
/// Implementations are shared across concurrent message handlers.
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MatchError::EmptyCorpus.to_string(), "Corpus contains no quotes");

        let err = MatchError::InvalidSettings("min_words_to_match must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid match settings: min_words_to_match must be at least 1"
        );
    }
}
