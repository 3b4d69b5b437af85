//! Corpus types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One logical quote after continuation lines have been merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// Corpus-assigned identifier. Not unique across the whole corpus.
    pub id: String,
    /// Speaker or section label, kept verbatim.
    pub source: String,
    /// Cleaned, whitespace-normalized text.
    pub text: String,
}

impl QuoteEntry {
    pub fn new(id: impl Into<String>, source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for QuoteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.text)
    }
}

/// Ordered, read-only collection of quotes.
///
/// Order is first appearance in the source and doubles as the circular
/// "next quote" relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    entries: Vec<QuoteEntry>,
}

impl Corpus {
    pub fn new(entries: Vec<QuoteEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuoteEntry> {
        self.entries.get(index)
    }

    /// Index of the first entry with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuoteEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[QuoteEntry] {
        &self.entries
    }

    pub fn stats(&self) -> CorpusStats {
        let sources: HashSet<&str> = self.entries.iter().map(|e| e.source.as_str()).collect();
        CorpusStats {
            entries: self.entries.len(),
            sources: sources.len(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a QuoteEntry;
    type IntoIter = std::slice::Iter<'a, QuoteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Summary counts for a loaded corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    /// Number of merged entries.
    pub entries: usize,
    /// Number of distinct source labels.
    pub sources: usize,
}
