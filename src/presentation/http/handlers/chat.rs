//! Chat Handlers
//!
//! Direct chat endpoint for the intake assistant. Message processing is an
//! external collaborator; this handler owns validation and the HTTP contract.

use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Reply sent while the assistant backend is detached
const CANNED_REPLY: &str = "Recebemos sua mensagem. Nossa equipe entrará em \
    contato em breve.";

/// Inbound chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Assistant reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: String,
}

/// Process a chat message and return the assistant's reply
pub async fn chat_message(
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".into()));
    }

    let session_id = body
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::info!(session_id = %session_id, "Received chat message");

    Ok(Json(ChatResponse {
        reply: CANNED_REPLY.to_string(),
        session_id,
    }))
}
