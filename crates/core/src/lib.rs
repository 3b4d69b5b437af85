pub mod config;
pub mod corpus;
pub mod matcher;
pub mod metrics;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, CorpusConfig,
    MatcherConfig, SanitizedConfig, ServerConfig,
};
pub use corpus::{Corpus, CorpusLoadError, CorpusLoader, CorpusStats, LoaderOptions, QuoteEntry};
pub use matcher::{
    InboundMessage, MatchEngine, MatchError, MatchSettings, RandomSource, SeededRandom,
    ThreadRandom,
};
