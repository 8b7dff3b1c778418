use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Stable machine-readable error codes carried in every error response body.
pub mod error_codes {
    pub const AUTH_FAILED: &str = "AUTH_FAILED";
    pub const EMAIL_ALREADY_REGISTERED: &str = "EMAIL_ALREADY_REGISTERED";
    pub const BAD_PASSWORD: &str = "BAD_PASSWORD";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const USER_ALREADY_VERIFIED: &str = "USER_ALREADY_VERIFIED";
    pub const NOT_AN_ADMIN: &str = "NOT_AN_ADMIN";
    pub const VERIFICATION_CODE_LIMIT: &str = "VERIFICATION_CODE_LIMIT";
    pub const INVALID_CODE: &str = "INVALID_CODE";
    pub const INVALID_REFRESH_TOKEN: &str = "INVALID_REFRESH_TOKEN";
    pub const INVALID_EMAIL_OR_PASSWORD: &str = "INVALID_EMAIL_OR_PASSWORD";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error taxonomy.
///
/// A cache miss is not part of this taxonomy: cache repositories report
/// absence as `Ok(None)` and the union layer turns it into a store read, so
/// it never crosses a component boundary as an error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("entity not found in store")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(&'static str),
    #[error("unauthorized")]
    Unauthorized,
    #[error("permission denied: {0}")]
    PermissionDenied(&'static str),
    #[error("bad request: {0}")]
    BadRequest(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error_code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, error_codes::USER_NOT_FOUND),
            AppError::Conflict(code) => (StatusCode::CONFLICT, code),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED),
            AppError::PermissionDenied(code) => (StatusCode::FORBIDDEN, code),
            AppError::BadRequest(code) => (StatusCode::BAD_REQUEST, code),
            AppError::Database(ref e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                )
            }
            AppError::Cache(ref e) => {
                tracing::error!("cache error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                )
            }
            AppError::Serialization(ref e) => {
                tracing::error!("serialization error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                )
            }
            AppError::Token(ref e) => {
                tracing::error!("token error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                )
            }
        };

        (status, Json(ErrorResponse { error_code })).into_response()
    }
}
