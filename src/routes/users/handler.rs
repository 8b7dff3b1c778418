use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::error::AppError;
use crate::middleware::{AdminUser, VerifiedUser};
use crate::services;

use super::model::{MeResponse, UpdateUserRequest, UsersQuery, UsersResponse};

pub async fn me(VerifiedUser(user): VerifiedUser) -> Json<MeResponse> {
    Json(services::users::me(user))
}

pub async fn user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(user_id): Path<i64>,
) -> Result<Json<MeResponse>, AppError> {
    Ok(Json(services::users::user(&state, user_id).await?))
}

pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<StatusCode, AppError> {
    services::users::update_user(&state, user_id, req).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::users::delete_user(&state, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(query): Query<UsersQuery>,
) -> Result<Json<UsersResponse>, AppError> {
    Ok(Json(services::users::users(&state, query.page).await?))
}
