use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub exp: i64, // expiry, unix seconds
}

/// Signs a token of the given kind; expiry comes from the configured
/// per-kind lifetime in minutes.
pub fn generate_token(
    user_id: i64,
    kind: TokenKind,
    config: &Config,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let lifetime_mins = match kind {
        TokenKind::Access => config.access_token_lifetime_mins,
        TokenKind::Refresh => config.refresh_token_lifetime_mins,
    };
    let expires = Utc::now() + Duration::minutes(lifetime_mins);

    let claims = Claims {
        id: user_id,
        kind,
        exp: expires.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok((token, expires))
}

pub fn decode_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
