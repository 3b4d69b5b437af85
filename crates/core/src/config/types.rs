use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Dialogue corpus source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Path to the delimited dialogue file
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
    /// Column separator; only the first two occurrences per line split fields
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Lines starting with any of these tokens are headers, not data
    #[serde(default = "default_header_markers")]
    pub header_markers: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            delimiter: default_delimiter(),
            header_markers: default_header_markers(),
        }
    }
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("dialogue.csv")
}

fn default_delimiter() -> char {
    ','
}

fn default_header_markers() -> Vec<String> {
    vec!["Section".to_string(), "ID".to_string()]
}

/// Match engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    /// Reply automatically when an inbound message echoes a quote
    #[serde(default = "default_auto_reply")]
    pub auto_reply: bool,
    /// Length of the consecutive word run a message must share with a quote
    #[serde(default = "default_min_words_to_match")]
    pub min_words_to_match: usize,
    /// Seed for the random quote picker. Unseeded uses the thread RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            auto_reply: default_auto_reply(),
            min_words_to_match: default_min_words_to_match(),
            seed: None,
        }
    }
}

fn default_auto_reply() -> bool {
    true
}

fn default_min_words_to_match() -> usize {
    4
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub corpus: SanitizedCorpusConfig,
    pub matcher: SanitizedMatcherConfig,
    pub server: ServerConfig,
}

/// Corpus config without the filesystem path
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCorpusConfig {
    pub file_name: Option<String>,
    pub delimiter: char,
    pub header_markers: Vec<String>,
}

/// Matcher config with the seed hidden
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedMatcherConfig {
    pub auto_reply: bool,
    pub min_words_to_match: usize,
    pub seeded: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            corpus: SanitizedCorpusConfig {
                file_name: config
                    .corpus
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned()),
                delimiter: config.corpus.delimiter,
                header_markers: config.corpus.header_markers.clone(),
            },
            matcher: SanitizedMatcherConfig {
                auto_reply: config.matcher.auto_reply,
                min_words_to_match: config.matcher.min_words_to_match,
                seeded: config.matcher.seed.is_some(),
            },
            server: config.server.clone(),
        }
    }
}
