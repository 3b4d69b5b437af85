//! The quote match engine.
//!
//! Holds the immutable corpus and answers three queries:
//! - a uniformly random quote
//! - the quote that follows a given id (circular)
//! - whether a message echoes a quote, replying with the quote after it

use std::sync::Arc;
use tracing::{debug, trace};

use crate::corpus::{Corpus, QuoteEntry};
use crate::matcher::random::ThreadRandom;
use crate::matcher::tokenize::{shares_run, tokenize};
use crate::matcher::traits::{MatchError, RandomSource};
use crate::matcher::types::{InboundMessage, MatchSettings};
use crate::metrics::{AUTO_REPLIES, MESSAGES_CHECKED, QUOTES_SERVED};

/// Answers quote queries against a shared, read-only corpus.
///
/// All queries take `&self`; one engine can serve any number of concurrent
/// message handlers.
pub struct MatchEngine {
    corpus: Arc<Corpus>,
    /// Tokens of each corpus entry, same order as the corpus.
    quote_tokens: Vec<Vec<String>>,
    settings: MatchSettings,
    rng: Arc<dyn RandomSource>,
}

impl MatchEngine {
    /// Create an engine over `corpus`.
    ///
    /// Fails if `min_words_to_match` is zero.
    pub fn new(
        corpus: Arc<Corpus>,
        settings: MatchSettings,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, MatchError> {
        if settings.min_words_to_match == 0 {
            return Err(MatchError::InvalidSettings(
                "min_words_to_match must be at least 1".to_string(),
            ));
        }

        let quote_tokens = corpus.iter().map(|entry| tokenize(&entry.text)).collect();

        Ok(Self {
            corpus,
            quote_tokens,
            settings,
            rng,
        })
    }

    /// Create an engine that picks random quotes with the thread RNG.
    pub fn with_thread_rng(corpus: Arc<Corpus>, settings: MatchSettings) -> Result<Self, MatchError> {
        Self::new(corpus, settings, Arc::new(ThreadRandom))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    /// A uniformly random entry.
    pub fn random_entry(&self) -> Result<&QuoteEntry, MatchError> {
        let len = self.non_empty_len()?;
        let index = self.rng.pick(len);
        self.corpus.get(index).ok_or(MatchError::EmptyCorpus)
    }

    /// A uniformly random quote formatted as `"{source}: {text}"`.
    pub fn random_quote(&self) -> Result<String, MatchError> {
        let entry = self.random_entry()?;
        QUOTES_SERVED.with_label_values(&["random"]).inc();
        Ok(entry.to_string())
    }

    /// The entry after the first one whose id is `after_id`, wrapping at the end.
    ///
    /// An unknown id behaves like index -1, so the first entry is returned.
    pub fn next_entry(&self, after_id: &str) -> Result<&QuoteEntry, MatchError> {
        let len = self.non_empty_len()?;
        let next = match self.corpus.position(after_id) {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.corpus.get(next).ok_or(MatchError::EmptyCorpus)
    }

    /// The quote after `after_id`, formatted as `"{source}: {text}"`.
    pub fn next_quote(&self, after_id: &str) -> Result<String, MatchError> {
        let entry = self.next_entry(after_id)?;
        QUOTES_SERVED.with_label_values(&["next"]).inc();
        Ok(entry.to_string())
    }

    /// First quote, in corpus order, sharing a run of `min_words_to_match`
    /// consecutive words with `message`.
    ///
    /// Ignores the auto-reply flag.
    pub fn find_match(&self, message: &str) -> Option<&QuoteEntry> {
        let message_tokens = tokenize(message);
        if message_tokens.len() < self.settings.min_words_to_match {
            return None;
        }

        self.quote_tokens
            .iter()
            .position(|quote| shares_run(quote, &message_tokens, self.settings.min_words_to_match))
            .and_then(|index| self.corpus.get(index))
    }

    /// Decide whether `message` gets an automatic reply.
    ///
    /// Returns `Ok(None)` when auto-reply is off or nothing matched.
    pub fn reply_to(&self, message: &str) -> Result<Option<String>, MatchError> {
        if !self.settings.auto_reply {
            return Ok(None);
        }
        self.non_empty_len()?;

        MESSAGES_CHECKED.inc();
        let Some(matched) = self.find_match(message) else {
            trace!("No quote matched message");
            return Ok(None);
        };

        debug!(quote_id = %matched.id, "Message matched quote");
        let reply = self.next_quote(&matched.id)?;
        AUTO_REPLIES.inc();
        Ok(Some(reply))
    }

    /// Apply [`reply_to`](Self::reply_to) to a regular user message.
    ///
    /// Messages authored by the bot itself never get a reply.
    pub fn handle_message(&self, message: &InboundMessage) -> Result<Option<String>, MatchError> {
        if message.author_is_self {
            return Ok(None);
        }
        self.reply_to(&message.text)
    }

    fn non_empty_len(&self) -> Result<usize, MatchError> {
        match self.corpus.len() {
            0 => Err(MatchError::EmptyCorpus),
            len => Ok(len),
        }
    }
}
