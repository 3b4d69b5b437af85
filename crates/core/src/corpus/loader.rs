//! Delimited dialogue file parser.
//!
//! Each data line carries three columns: id, source, text. Only the first two
//! delimiters split, so the text column may contain the delimiter itself.
//! Adjacent lines sharing an id are continuation lines of one entry.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info};

use super::error::CorpusLoadError;
use super::types::{Corpus, QuoteEntry};
use crate::config::CorpusConfig;

/// Backslash tags (`\pause`) and bracketed annotations (`[laughs]`).
static MARKUP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\w+|\[.*?\]").unwrap());

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Options controlling how raw lines are split and filtered.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub delimiter: char,
    pub header_markers: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        CorpusConfig::default().into()
    }
}

impl From<&CorpusConfig> for LoaderOptions {
    fn from(config: &CorpusConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            header_markers: config.header_markers.clone(),
        }
    }
}

impl From<CorpusConfig> for LoaderOptions {
    fn from(config: CorpusConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            header_markers: config.header_markers,
        }
    }
}

/// Builds a [`Corpus`] from raw delimited lines.
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    options: LoaderOptions,
}

impl CorpusLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load a corpus from a file on disk.
    pub fn load_file(&self, path: &Path) -> Result<Corpus, CorpusLoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CorpusLoadError::NotFound(path.display().to_string()),
            _ => CorpusLoadError::Io(e),
        })?;

        info!("Loading corpus from {:?}", path);
        self.load_reader(BufReader::new(file))
    }

    /// Load a corpus from any buffered reader. A failed line read aborts the load.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Corpus, CorpusLoadError> {
        let mut acc = Accumulator::default();
        for line in reader.lines() {
            let line = line?;
            self.fold_line(&mut acc, &line);
        }
        Ok(acc.finish())
    }

    /// Load a corpus from lines already in memory.
    pub fn load_lines<I, S>(&self, lines: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut acc = Accumulator::default();
        for line in lines {
            self.fold_line(&mut acc, line.as_ref());
        }
        acc.finish()
    }

    fn fold_line(&self, acc: &mut Accumulator, line: &str) {
        let line = if acc.lines_seen == 0 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            line
        };
        acc.lines_seen += 1;

        if line.trim().is_empty() || self.is_header(line) {
            return;
        }

        let mut fields = line.splitn(3, self.options.delimiter);
        let (Some(id), Some(source), Some(raw_text)) = (fields.next(), fields.next(), fields.next())
        else {
            debug!(line = acc.lines_seen, "Skipping malformed corpus row");
            acc.skipped += 1;
            return;
        };

        let text = clean_text(raw_text, self.options.delimiter);

        // Only the most recent entry can absorb a continuation line.
        match acc.entries.last_mut() {
            Some(last) if last.id == id => {
                // Trimmed after the join, so an empty first fragment leaves no leading space.
                last.text = collapse_whitespace(&format!("{} {}", last.text, text));
            }
            _ => acc.entries.push(QuoteEntry::new(id, source, text)),
        }
    }

    fn is_header(&self, line: &str) -> bool {
        self.options
            .header_markers
            .iter()
            .any(|marker| line.starts_with(marker.as_str()))
    }
}

#[derive(Default)]
struct Accumulator {
    entries: Vec<QuoteEntry>,
    lines_seen: usize,
    skipped: usize,
}

impl Accumulator {
    fn finish(self) -> Corpus {
        info!(
            entries = self.entries.len(),
            lines = self.lines_seen,
            skipped = self.skipped,
            "Corpus loaded"
        );
        Corpus::new(self.entries)
    }
}

/// Clean the raw text column of a corpus row.
///
/// Strips quote characters, trailing delimiters, backslash tags and bracketed
/// annotations, then normalizes whitespace.
pub fn clean_text(raw: &str, delimiter: char) -> String {
    let unquoted = raw.replace('"', "");
    let trimmed = unquoted.trim().trim_end_matches(delimiter);
    let stripped = MARKUP_PATTERN.replace_all(trimmed, "");
    collapse_whitespace(&stripped)
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
