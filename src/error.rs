use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use userhub_shared::Error as UserError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Missing or invalid authorization token")]
    Unauthorized,

    #[error("Admin access required")]
    AdminRequired,

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid authorization token".to_string(),
            ),
            AppError::AdminRequired => {
                (StatusCode::FORBIDDEN, "Admin access required".to_string())
            }
            AppError::User(err) => match err {
                UserError::Validate(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
                UserError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
                UserError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
                }
                UserError::DuplicateEmail => {
                    (StatusCode::BAD_REQUEST, "Email already in use".to_string())
                }
                UserError::NotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
                UserError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
                UserError::Unknown(e) => {
                    tracing::error!("Internal error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected error occurred".to_string(),
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "msg": message }))).into_response()
    }
}
