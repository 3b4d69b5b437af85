//! Match engine settings and message types.

use serde::{Deserialize, Serialize};

use crate::config::MatcherConfig;

/// Fixed matching rules for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Whether passive monitoring replies at all.
    pub auto_reply: bool,
    /// Length of the consecutive word run a message must share with a quote.
    pub min_words_to_match: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        (&MatcherConfig::default()).into()
    }
}

impl From<&MatcherConfig> for MatchSettings {
    fn from(config: &MatcherConfig) -> Self {
        Self {
            auto_reply: config.auto_reply,
            min_words_to_match: config.min_words_to_match,
        }
    }
}

/// An inbound chat message as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message was sent by this bot (or is otherwise not a regular user message).
    #[serde(default)]
    pub author_is_self: bool,
    pub text: String,
}

impl InboundMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            author_is_self: false,
            text: text.into(),
        }
    }

    pub fn from_self(text: impl Into<String>) -> Self {
        Self {
            author_is_self: true,
            text: text.into(),
        }
    }
}
