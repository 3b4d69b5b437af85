//! Quote matching - random quotes, successor lookup and passive echo detection.
//!
//! An inbound message "echoes" a quote when both share a run of
//! `min_words_to_match` consecutive words after lowercasing and splitting on
//! non-word characters. The reply is the quote that follows the matched one
//! in corpus order, wrapping around at the end.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quotecho_core::{CorpusLoader, MatchEngine, MatchSettings};
//!
//! let corpus = Arc::new(CorpusLoader::default().load_file(path)?);
//! let engine = MatchEngine::with_thread_rng(corpus, MatchSettings {
//!     auto_reply: true,
//!     min_words_to_match: 3,
//! })?;
//!
//! if let Some(reply) = engine.reply_to("well well well, look who it is")? {
//!     // Send reply back to the channel
//! }
//! ```

mod engine;
mod random;
mod tokenize;
mod traits;
mod types;

pub use engine::MatchEngine;
pub use random::{SeededRandom, ThreadRandom};
pub use tokenize::{contains_run, shares_run, tokenize};
pub use traits::{MatchError, RandomSource};
pub use types::{InboundMessage, MatchSettings};
