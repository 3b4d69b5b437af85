//! Dialogue corpus: parsing, cleanup and the ordered quote list.
//!
//! The corpus is built once at startup and never mutated afterwards. Share it
//! behind an `Arc` with anything that needs to query it.

mod error;
mod loader;
mod types;

pub use error::CorpusLoadError;
pub use loader::{clean_text, collapse_whitespace, CorpusLoader, LoaderOptions};
pub use types::{Corpus, CorpusStats, QuoteEntry};
