use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - At least one consecutive word is required to match
/// - Header markers are non-empty (an empty marker would skip every line)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.matcher.min_words_to_match == 0 {
        return Err(ConfigError::ValidationError(
            "matcher.min_words_to_match must be at least 1".to_string(),
        ));
    }

    if config.corpus.header_markers.iter().any(|m| m.is_empty()) {
        return Err(ConfigError::ValidationError(
            "corpus.header_markers cannot contain empty strings".to_string(),
        ));
    }

    Ok(())
}
