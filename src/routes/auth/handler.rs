use axum::{
    extract::{Json, State},
    http::StatusCode,
};

use crate::AppState;
use crate::error::AppError;
use crate::middleware::UnverifiedUser;
use crate::services;

use super::model::{
    CheckVerificationCodeRequest, JwtResponse, RefreshTokenRequest, SignInRequest, SignUpRequest,
};

pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    Ok(Json(services::auth::sign_up(&state, req).await?))
}

pub async fn resend_verification_code(
    State(state): State<AppState>,
    UnverifiedUser(user): UnverifiedUser,
) -> Result<StatusCode, AppError> {
    services::auth::resend_verification_code(&state, &user).await?;

    Ok(StatusCode::OK)
}

pub async fn check_verification_code(
    State(state): State<AppState>,
    UnverifiedUser(user): UnverifiedUser,
    Json(req): Json<CheckVerificationCodeRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    Ok(Json(
        services::auth::check_verification_code(&state, req.code, user).await?,
    ))
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    Ok(Json(
        services::auth::refresh_access_token(&state, &req.refresh_token).await?,
    ))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    Ok(Json(services::auth::sign_in(&state, req).await?))
}
