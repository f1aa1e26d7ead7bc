use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use userhub_shared::Role;

use crate::error::AppError;
use crate::middleware::auth::Auth;
use crate::routes::AppState;

/// Admin middleware that verifies the resolved user has the admin role and
/// an active account. Must run inside `auth_middleware`.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth = request
        .extensions()
        .get::<Auth>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Admin middleware: no authenticated user in request extensions");
            AppError::Unauthorized.into_response()
        })?;

    let user = state
        .user_command
        .find(auth.user_id.to_owned())
        .await
        .map_err(|e| AppError::User(e).into_response())?;

    match user {
        Some(user) if user.role == Role::Admin && user.is_active => Ok(next.run(request).await),
        _ => {
            tracing::warn!(
                user_id = %auth.user_id,
                "Non-admin user attempted to access admin route"
            );
            Err(AppError::AdminRequired.into_response())
        }
    }
}
