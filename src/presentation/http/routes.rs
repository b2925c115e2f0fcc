//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::request_id_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        // Tag every response with a correlation id
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/conversation/start",
            post(handlers::conversation::start_conversation),
        )
        .route(
            "/conversation/respond",
            post(handlers::conversation::respond_to_conversation),
        )
        .route("/chat", post(handlers::chat::chat_message))
        .route("/webhook/whatsapp", post(handlers::webhook::whatsapp_webhook))
}
