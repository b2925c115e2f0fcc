//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod chat;
pub mod conversation;
pub mod health;
pub mod webhook;
