use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use userhub_user::validate_jwt;

use crate::error::AppError;
use crate::routes::AppState;

/// Auth extension containing the user id resolved from the bearer token
#[derive(Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

/// Authentication middleware that validates the `Authorization: Bearer`
/// header
///
/// Validates the token signature and expiry and inserts an Auth extension
/// with the resolved user id. Responds 401 if the header is missing or the
/// token is invalid or expired. Whether the user behind a valid token still
/// exists is a per-handler concern: a deleted user's token yields 404 from
/// lookups, not 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        tracing::warn!("Missing bearer token");
        return AppError::Unauthorized.into_response();
    };

    match validate_jwt(bearer.token(), &state.config.jwt.secret) {
        Ok(claims) => {
            req.extensions_mut().insert(Auth {
                user_id: claims.sub,
            });
            next.run(req).await
        }
        Err(e) => {
            tracing::warn!("Invalid bearer token: {:?}", e);
            AppError::Unauthorized.into_response()
        }
    }
}
