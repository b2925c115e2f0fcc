//! Webhook Handlers
//!
//! Inbound webhook endpoints for messaging platforms.

use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Webhook acknowledgment
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
}

/// Accept a WhatsApp webhook delivery
///
/// The payload shape varies by provider and event type, so it is accepted as
/// raw JSON and handed off; delivery processing happens out of band.
pub async fn whatsapp_webhook(Json(payload): Json<Value>) -> Json<WebhookAck> {
    let event_keys: Vec<&str> = payload
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    tracing::info!(?event_keys, "WhatsApp webhook received");

    Json(WebhookAck { status: "received" })
}
