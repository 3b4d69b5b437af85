use std::sync::Arc;
use quotecho_core::{Config, MatchEngine, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    engine: Arc<MatchEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<MatchEngine>) -> Self {
        Self { config, engine }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn engine(&self) -> &MatchEngine {
        self.engine.as_ref()
    }
}
