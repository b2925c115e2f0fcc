//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod request_id;

pub use cors::{create_cors_layer, CorsGatekeeperLayer, CorsPolicy};
pub use logging::create_trace_layer;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
