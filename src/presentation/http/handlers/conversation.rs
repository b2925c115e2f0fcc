//! Conversation Flow Handlers
//!
//! Session bootstrap and response endpoints for the web intake flow. The
//! orchestration behind the flow (question sequencing, lead collection) lives
//! in a separate service; these handlers own only the HTTP contract.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Greeting sent when a web session starts
const GREETING: &str = "Olá! Para garantir que registramos corretamente suas \
    informações, vamos começar do início. Tudo bem?";

/// Fallback acknowledgment for a user response
const ACKNOWLEDGMENT: &str = "Como posso ajudá-lo?";

/// User response within an existing conversation
#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Conversation state returned to the frontend
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub session_id: String,
    pub response: String,
    pub ai_mode: bool,
    pub flow_completed: bool,
    pub phone_collected: bool,
}

/// Start a new conversation session for the web platform
pub async fn start_conversation() -> (StatusCode, Json<ConversationResponse>) {
    let session_id = Uuid::new_v4().to_string();
    tracing::info!(session_id = %session_id, "Starting new web conversation");

    let response = ConversationResponse {
        session_id,
        response: GREETING.to_string(),
        ai_mode: false,
        flow_completed: false,
        phone_collected: false,
    };

    (StatusCode::OK, Json(response))
}

/// Process a user response within the intake flow
pub async fn respond_to_conversation(
    Json(body): Json<ConversationRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".into()));
    }

    // A missing session id means the frontend lost state; allocate a new one
    let session_id = body
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| {
            let id = Uuid::new_v4().to_string();
            tracing::info!(session_id = %id, "New session generated");
            id
        });

    tracing::info!(session_id = %session_id, "Processing web response");

    Ok(Json(ConversationResponse {
        session_id,
        response: ACKNOWLEDGMENT.to_string(),
        ai_mode: false,
        flow_completed: false,
        phone_collected: false,
    }))
}
