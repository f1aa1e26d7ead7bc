use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use userhub_user::{LoginInput, RegisterInput, User, generate_jwt};

use crate::error::AppError;
use crate::middleware::auth::Auth;
use crate::routes::AppState;

/// Request body shared by login and register. Fields are optional so a
/// missing one is reported as a 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// POST /login
pub async fn post_login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (email, password) = require_credentials(payload)?;

    let user = state
        .user_command
        .login(LoginInput { email, password })
        .await?;

    let access_token = issue_token(&state, &user)?;

    Ok((StatusCode::OK, Json(AuthResponse { access_token, user })))
}

/// POST /register
pub async fn post_register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (email, password) = require_credentials(payload)?;

    let user = state
        .user_command
        .register(RegisterInput { email, password })
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    let access_token = issue_token(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse { access_token, user }),
    ))
}

/// GET /profile - the authenticated user's own record
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_command
        .find(auth.user_id)
        .await?
        .ok_or(userhub_shared::Error::NotFound)?;

    Ok(Json(UserResponse { user }))
}

fn require_credentials(payload: CredentialsPayload) -> Result<(String, String), AppError> {
    match (payload.email, payload.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok((email, password))
        }
        _ => Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        )),
    }
}

fn issue_token(state: &AppState, user: &User) -> Result<String, AppError> {
    let expiration_seconds = state.config.jwt.expiration_days as u64 * 24 * 60 * 60;

    let token = generate_jwt(
        user.id.to_owned(),
        user.email.to_owned(),
        user.role.to_string(),
        &state.config.jwt.secret,
        expiration_seconds,
    )?;

    Ok(token)
}
