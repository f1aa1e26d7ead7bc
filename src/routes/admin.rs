use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use userhub_user::User;

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub users: Vec<User>,
}

/// GET /admin/users - user listing for operators, behind the admin gate
pub async fn get_admin_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_command.list().await?;

    Ok(Json(AdminUsersResponse { users }))
}
