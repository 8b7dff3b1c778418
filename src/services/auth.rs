use rand::Rng;

use crate::AppState;
use crate::cache::models::CachedUser;
use crate::config::Config;
use crate::database::models::{NewUser, UserPatch};
use crate::error::{AppError, error_codes};
use crate::routes::auth::model::{JwtResponse, SignInRequest, SignUpRequest};
use crate::utils::{TokenKind, decode_token, generate_token, hash_password};

pub async fn sign_up(state: &AppState, req: SignUpRequest) -> Result<JwtResponse, AppError> {
    if state.store.exists(&req.email).await? {
        return Err(AppError::Conflict(error_codes::EMAIL_ALREADY_REGISTERED));
    }

    let password_hash =
        hash_password(&req.password).map_err(|_| AppError::BadRequest(error_codes::BAD_PASSWORD))?;

    let is_admin = req.email == state.config.admin_email;
    let user = state
        .union
        .create(NewUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: password_hash,
            is_admin,
        })
        .await?;

    issue_verification_code(state, user.id).await?;

    token_response(&state.config, user.id, true)
}

pub async fn resend_verification_code(
    state: &AppState,
    current_user: &CachedUser,
) -> Result<(), AppError> {
    if state
        .user_cache
        .check_verification_code_limit(current_user.id)
        .await?
    {
        return Err(AppError::PermissionDenied(
            error_codes::VERIFICATION_CODE_LIMIT,
        ));
    }

    issue_verification_code(state, current_user.id).await
}

pub async fn check_verification_code(
    state: &AppState,
    code: u32,
    current_user: CachedUser,
) -> Result<JwtResponse, AppError> {
    let matches = state
        .user_cache
        .check_verification_code(current_user.id, code)
        .await?;
    if !matches {
        return Err(AppError::PermissionDenied(error_codes::INVALID_CODE));
    }

    let mut user = current_user;
    user.verified = true;
    state
        .union
        .update(
            &user,
            UserPatch {
                verified: Some(true),
                ..Default::default()
            },
        )
        .await?;

    token_response(&state.config, user.id, true)
}

pub async fn refresh_access_token(
    state: &AppState,
    refresh_token: &str,
) -> Result<JwtResponse, AppError> {
    let claims = decode_token(refresh_token, &state.config)
        .map_err(|_| AppError::PermissionDenied(error_codes::INVALID_REFRESH_TOKEN))?;

    if claims.kind != TokenKind::Refresh {
        return Err(AppError::PermissionDenied(
            error_codes::INVALID_REFRESH_TOKEN,
        ));
    }

    let user = match state.union.get(claims.id).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            return Err(AppError::PermissionDenied(error_codes::USER_NOT_FOUND));
        }
        Err(e) => return Err(e),
    };

    token_response(&state.config, user.id, false)
}

pub async fn sign_in(state: &AppState, req: SignInRequest) -> Result<JwtResponse, AppError> {
    let user = match state.union.get_by_email(&req.email).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            return Err(AppError::PermissionDenied(
                error_codes::INVALID_EMAIL_OR_PASSWORD,
            ));
        }
        Err(e) => return Err(e),
    };

    let verified = state.union.verify_password(user.id, &req.password).await?;
    if !verified {
        return Err(AppError::PermissionDenied(
            error_codes::INVALID_EMAIL_OR_PASSWORD,
        ));
    }

    token_response(&state.config, user.id, true)
}

/// Generates a fresh 4-digit code and stores it together with its one-minute
/// rate-limit marker. There is no mail transport; the code lands in the logs.
async fn issue_verification_code(state: &AppState, user_id: i64) -> Result<(), AppError> {
    let code: u32 = rand::thread_rng().gen_range(1000..=9999);
    tracing::warn!("verification code for user {user_id}: {code}");

    state
        .user_cache
        .set_verification_code(user_id, code)
        .await
}

fn token_response(
    config: &Config,
    user_id: i64,
    with_refresh_token: bool,
) -> Result<JwtResponse, AppError> {
    let (access_token, expires) = generate_token(user_id, TokenKind::Access, config)?;

    let refresh_token = if with_refresh_token {
        let (token, _) = generate_token(user_id, TokenKind::Refresh, config)?;
        Some(token)
    } else {
        None
    };

    Ok(JwtResponse {
        access_token,
        refresh_token,
        expires,
    })
}
