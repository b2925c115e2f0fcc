//! # Intake Server Library
//!
//! This crate provides the HTTP gateway in front of a legal client-intake
//! chat assistant:
//! - Dynamic CORS origin validation and preflight handling for every route
//! - Thin REST endpoints for conversation, chat, and webhook traffic
//!
//! ## Module Structure
//!
//! ```text
//! intake_server/
//! +-- config/        Configuration management
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
