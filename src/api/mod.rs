//! API layer - HTTP handlers, extractors and routing
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers and their request shapes
//! - Custom extractors
//! - Route definitions and OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
