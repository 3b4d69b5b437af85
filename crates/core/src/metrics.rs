//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Corpus size after load
//! - Quote queries (random, next)
//! - Passive message monitoring (checked, matched)

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Corpus
// =============================================================================

/// Entries in the loaded corpus.
pub static CORPUS_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("quotecho_corpus_entries", "Number of quotes in the loaded corpus").unwrap()
});

// =============================================================================
// Match Engine
// =============================================================================

/// Quotes served by query kind.
pub static QUOTES_SERVED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("quotecho_quotes_served_total", "Total quotes returned"),
        &["kind"], // "random", "next"
    )
    .unwrap()
});

/// Inbound messages checked against the corpus.
pub static MESSAGES_CHECKED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "quotecho_messages_checked_total",
        "Total inbound messages tested for a quote match",
    )
    .unwrap()
});

/// Inbound messages that matched a quote and produced a reply.
pub static AUTO_REPLIES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "quotecho_auto_replies_total",
        "Total automatic replies sent for matched messages",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CORPUS_ENTRIES.clone()),
        Box::new(QUOTES_SERVED.clone()),
        Box::new(MESSAGES_CHECKED.clone()),
        Box::new(AUTO_REPLIES.clone()),
    ]
}
