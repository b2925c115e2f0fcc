//! Common Test Utilities
//!
//! Shared helpers and test infrastructure.

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;

use intake_server::config::{CorsSettings, ServerSettings, Settings};
use intake_server::startup::build_router;

/// Frontend origin present in the test allow-list
pub const FRONTEND_ORIGIN: &str = "https://lexintake.netlify.app";

/// Backend self-reference origin present in the test allow-list
pub const BACKEND_ORIGIN: &str = "https://api.lexintake.com.br";

/// Settings used by all integration tests
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsSettings {
            allowed_origins: vec![FRONTEND_ORIGIN.to_string(), BACKEND_ORIGIN.to_string()],
        },
        environment: "test".to_string(),
    }
}

/// Test application wrapping the real router with production wiring
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self {
            router: build_router(&test_settings()),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a GET request with an Origin header
    pub async fn get_with_origin(&self, uri: &str, origin: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make an OPTIONS preflight request with an Origin header
    pub async fn preflight(&self, uri: &str, origin: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(uri)
                    .header(header::ORIGIN, origin)
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body into a JSON value
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
