/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token verification failed: {0}")]
    Verification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Validation(msg) => ServerError::Validation(msg),
            RosterError::UserNotFound(id) => ServerError::NotFound(id),
            RosterError::Unauthorized => ServerError::Unauthorized,
            RosterError::Verification(msg) => ServerError::Verification(msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // The user routes speak a {success, message} envelope while the
        // session routes speak {error}; both shapes are part of the
        // compatibility contract.
        match self {
            ServerError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": msg })),
            )
                .into_response(),
            ServerError::NotFound(id) => {
                tracing::debug!("no user record for id {id}");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "User not found" })),
                )
                    .into_response()
            }
            ServerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            ServerError::Verification(msg) => {
                tracing::warn!("token verification failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": msg })),
                )
                    .into_response()
            }
            ServerError::Config(ref msg) | ServerError::Internal(ref msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
