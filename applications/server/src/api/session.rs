/// Session API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde_json::json;

/// POST /session
/// Exchange a bearer token for the `session` cookie
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let ticket = state.sessions.establish(auth_header).await?;
    tracing::debug!("session established");

    Ok((
        [(header::SET_COOKIE, ticket.set_cookie())],
        Json(json!({ "status": "success" })),
    ))
}

/// POST /logout
/// Overwrite the `session` cookie with an epoch expiry so the client drops it
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = state.sessions.clear();

    (
        [(header::SET_COOKIE, cleared.set_cookie())],
        Json(json!({ "message": "Logged out" })),
    )
}
