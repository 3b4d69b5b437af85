//! Quote API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use quotecho_core::{CorpusStats, InboundMessage, MatchError};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for an inbound chat message
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    /// Message was authored by the bot itself
    #[serde(default)]
    pub author_is_self: bool,
    /// Message content
    pub text: String,
}

impl From<MessageBody> for InboundMessage {
    fn from(body: MessageBody) -> Self {
        Self {
            author_is_self: body.author_is_self,
            text: body.text,
        }
    }
}

/// A single formatted quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}

/// Auto-reply decision for an inbound message
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct QuoteErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<QuoteErrorResponse>);

fn error_response(err: MatchError) -> ApiError {
    let status = match err {
        MatchError::EmptyCorpus => StatusCode::SERVICE_UNAVAILABLE,
        MatchError::InvalidSettings(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("Quote query failed: {}", err);
    (
        status,
        Json(QuoteErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Get a uniformly random quote
pub async fn random_quote(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.engine().random_quote().map_err(error_response)?;
    Ok(Json(QuoteResponse { quote }))
}

/// Get the quote following the given id
pub async fn next_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.engine().next_quote(&id).map_err(error_response)?;
    Ok(Json(QuoteResponse { quote }))
}

/// Check an inbound message and return the auto-reply, if any
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MessageBody>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let message = InboundMessage::from(body);
    let reply = state
        .engine()
        .handle_message(&message)
        .map_err(error_response)?;

    debug!(replied = reply.is_some(), "Processed inbound message");
    Ok(Json(ReplyResponse { reply }))
}

/// Corpus summary counts
pub async fn corpus_stats(State(state): State<Arc<AppState>>) -> Json<CorpusStats> {
    Json(state.engine().corpus().stats())
}
