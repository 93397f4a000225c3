/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use roster_core::{CreateUser, UpdateUser};
use serde_json::json;

/// GET /users
/// List every record in insertion order
pub async fn list_users(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let users = state.users.list().await?;
    Ok(Json(json!({
        "success": true,
        "data": users,
        "total": users.len(),
    })))
}

/// POST /users
/// Create a user record after external registration
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<impl IntoResponse> {
    let user = state.users.create(req).await?;
    tracing::info!(id = %user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User created successfully",
            "data": user,
        })),
    ))
}

/// GET /users/:id
/// Look up a single record
pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let user = state.users.get(&id).await?;
    Ok(Json(json!({ "success": true, "data": user })))
}

/// PUT /users/:id
/// Merge a patch over an existing record; `id` and `uid` are never altered
pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<UpdateUser>,
) -> Result<Json<serde_json::Value>> {
    let user = state.users.update(&id, patch).await?;
    Ok(Json(json!({
        "success": true,
        "message": "User updated successfully",
        "data": user,
    })))
}

/// DELETE /users/:id
/// Remove a record, echoing it back as confirmation
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let user = state.users.delete(&id).await?;
    tracing::info!(id = %id, "user deleted");

    Ok(Json(json!({
        "success": true,
        "message": format!("User with id {id} deleted successfully"),
        "data": { "deletedUser": user },
    })))
}
