//! Testing utilities and fixtures.
//!
//! Provides a scripted [`RandomSource`](crate::matcher::RandomSource) and
//! helpers for building small corpora without touching the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quotecho_core::testing::{fixtures, SequenceRandom};
//! use quotecho_core::{MatchEngine, MatchSettings};
//!
//! let corpus = Arc::new(fixtures::corpus(&[("1", "A", "hello there")]));
//! let engine = MatchEngine::new(corpus, MatchSettings::default(), Arc::new(SequenceRandom::new(vec![0])))?;
//! ```

mod sequence_random;

pub use sequence_random::SequenceRandom;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::corpus::{Corpus, CorpusLoader, QuoteEntry};

    /// A small dialogue file exercising headers, continuation lines,
    /// quoted commas, markup and a malformed row.
    pub const DIALOGUE_CSV: &str = r#"Section,Speaker,English
ID,Source,English
100,Renee,"Well, well, well. Look who finally showed up."
101,Marcus,[sighs] I got here as fast as I could.
102,Renee,"You said that last time, \beat and the time before."
102,Renee,Every single time.
103,Marcus,Traffic was terrible.
not a data row
104,Narrator,[Silence falls over the room]
105,Renee,Fine. Sit down and eat your soup,
"#;

    /// Build a corpus directly from `(id, source, text)` triples.
    ///
    /// Texts are used as given; no cleanup or merging is applied.
    pub fn corpus(entries: &[(&str, &str, &str)]) -> Corpus {
        Corpus::new(
            entries
                .iter()
                .map(|(id, source, text)| QuoteEntry::new(*id, *source, *text))
                .collect(),
        )
    }

    /// Parse [`DIALOGUE_CSV`] with the default loader.
    pub fn dialogue_corpus() -> Corpus {
        CorpusLoader::default().load_lines(DIALOGUE_CSV.lines())
    }
}
