use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotecho_core::{
    load_config, metrics::CORPUS_ENTRIES, validate_config, CorpusLoader, LoaderOptions,
    MatchEngine, MatchSettings, RandomSource, SeededRandom, ThreadRandom,
};
use quotecho_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("quotecho {} starting", VERSION);

    // Determine config path
    let config_path = std::env::var("QUOTECHO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Compute config hash so deployments can tell configurations apart in logs
    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!("Configuration loaded successfully (hash {})", &config_hash[..16]);
    info!(
        "Auto-reply: {}, words to match: {}",
        config.matcher.auto_reply, config.matcher.min_words_to_match
    );

    // Load the corpus once; it is read-only from here on
    let loader = CorpusLoader::new(LoaderOptions::from(&config.corpus));
    let corpus = loader
        .load_file(&config.corpus.path)
        .with_context(|| format!("Failed to load corpus from {:?}", config.corpus.path))?;

    let stats = corpus.stats();
    CORPUS_ENTRIES.set(stats.entries as i64);
    if corpus.is_empty() {
        warn!("Corpus is empty; quote queries will fail until it is populated and the server restarted");
    } else {
        info!(
            "Corpus ready: {} quotes from {} sources",
            stats.entries, stats.sources
        );
    }

    // Create match engine
    let rng: Arc<dyn RandomSource> = match config.matcher.seed {
        Some(seed) => {
            info!("Using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };
    let engine = MatchEngine::new(
        Arc::new(corpus),
        MatchSettings::from(&config.matcher),
        rng,
    )
    .context("Failed to create match engine")?;

    // Create app state
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, Arc::new(engine)));

    // Create router
    let app = create_router(state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
