//! Roster Server Library
//!
//! User directory REST API with cookie-based sessions delegated to an
//! external token verifier, plus a static OpenAPI document.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::verifier::JwtVerifier;
pub use state::AppState;
