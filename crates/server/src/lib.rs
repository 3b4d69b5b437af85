//! HTTP host for the quote match engine.
//!
//! Exposes the engine's collaborator-facing operations (random quote, next
//! quote, inbound message checks) plus health, config and metrics endpoints.

pub mod api;
pub mod metrics;
pub mod state;
