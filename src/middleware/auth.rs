use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::AppState;
use crate::cache::models::CachedUser;
use crate::error::{AppError, error_codes};
use crate::utils::{TokenKind, decode_token};

/// Resolves the bearer access token to a cached user view via the union.
/// Any failure along the way (missing header, bad token, wrong token type,
/// unknown user) is an opaque 401.
async fn authenticate(parts: &Parts, state: &AppState) -> Result<CachedUser, AppError> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let claims = decode_token(token, &state.config).map_err(|_| AppError::Unauthorized)?;
    if claims.kind != TokenKind::Access {
        return Err(AppError::Unauthorized);
    }

    match state.union.get(claims.id).await {
        Ok(user) => Ok(user),
        Err(AppError::NotFound) => Err(AppError::Unauthorized),
        Err(e) => Err(e),
    }
}

/// The verification endpoints only make sense before verification.
pub struct UnverifiedUser(pub CachedUser);

impl FromRequestParts<AppState> for UnverifiedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state).await?;
        if user.verified {
            return Err(AppError::PermissionDenied(
                error_codes::USER_ALREADY_VERIFIED,
            ));
        }

        Ok(UnverifiedUser(user))
    }
}

pub struct VerifiedUser(pub CachedUser);

impl FromRequestParts<AppState> for VerifiedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state).await?;
        if !user.verified {
            return Err(AppError::Unauthorized);
        }

        Ok(VerifiedUser(user))
    }
}

/// Verified and admin; everything under the admin-only routes.
pub struct AdminUser(pub CachedUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let VerifiedUser(user) = VerifiedUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::PermissionDenied(error_codes::NOT_AN_ADMIN));
        }

        Ok(AdminUser(user))
    }
}
