use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use userhub_user::{UpdateInput, User};

use crate::error::AppError;
use crate::middleware::auth::Auth;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

/// GET /users - every user, visible to any authenticated caller
///
/// Known access-control gap carried over from the original design: reads
/// are not restricted to the caller's own record.
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.user_command.list().await?;

    Ok(Json(UsersResponse { users }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_command
        .find(id)
        .await?
        .ok_or(userhub_shared::Error::NotFound)?;

    Ok(Json(UserResponse { user }))
}

/// PUT /users/{id} - only the owner may update their record
pub async fn put_user(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePayload>,
) -> Result<impl IntoResponse, AppError> {
    if auth.user_id != id {
        return Err(userhub_shared::Error::Forbidden.into());
    }

    let user = state
        .user_command
        .update(
            id,
            UpdateInput {
                email: payload.email,
                is_active: payload.is_active,
                password: payload.password,
            },
        )
        .await?;

    Ok(Json(UserResponse { user }))
}

/// DELETE /users/{id} - only the owner may delete their record
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if auth.user_id != id {
        return Err(userhub_shared::Error::Forbidden.into());
    }

    state.user_command.delete(id).await?;

    Ok(Json(json!({ "msg": "User deleted successfully" })))
}
