/// API route modules
pub mod docs;
pub mod health;
pub mod session;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the full application router
///
/// Paths, methods, and response bodies are part of the compatibility
/// contract; shared by the binary and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Users
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        // Session
        .route("/session", post(session::create_session))
        .route("/logout", post(session::logout))
        // Docs
        .route("/docs", get(docs::docs_page))
        .route("/openapi.json", get(docs::openapi_document))
        // Health
        .route("/health", get(health::health))
        .with_state(state)
}
