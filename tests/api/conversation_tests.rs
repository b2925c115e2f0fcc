//! Conversation and Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_start_conversation_allocates_session() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/conversation/start", "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let session_id = body["session_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(session_id).is_ok());
    assert!(!body["response"].as_str().unwrap().is_empty());
    assert_eq!(body["flow_completed"], false);
}

#[tokio::test]
async fn test_respond_echoes_session_id() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/conversation/respond",
            r#"{"message": "Meu nome é Ana", "session_id": "abc-123"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["session_id"], "abc-123");
}

#[tokio::test]
async fn test_respond_without_session_allocates_one() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/conversation/respond", r#"{"message": "Olá"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let session_id = body["session_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(session_id).is_ok());
}

#[tokio::test]
async fn test_respond_rejects_empty_message() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/conversation/respond", r#"{"message": ""}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Message cannot be empty");
}

#[tokio::test]
async fn test_chat_returns_reply() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/chat", r#"{"message": "Preciso de ajuda"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(!body["reply"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_whatsapp_webhook_acknowledges() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/webhook/whatsapp",
            r#"{"entry": [], "object": "whatsapp_business_account"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "received");
}
