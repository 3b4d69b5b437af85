//! Corpus loading errors.

use thiserror::Error;

/// Errors that can occur while reading the corpus source.
///
/// Individual malformed lines are never errors; they are skipped.
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    #[error("Corpus file not found: {0}")]
    NotFound(String),

    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}
