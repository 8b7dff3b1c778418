use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys;
use crate::cache::models::CachedUser;
use crate::cache::repos::UserEntityCache;
use crate::database::models::UserRecord;
use crate::error::AppError;

/// Entity TTL, refreshed on every read and write.
const USER_TTL_SECS: u64 = 3600;
/// A verification code stays checkable for two days.
const VERIFICATION_CODE_TTL_SECS: u64 = 2 * 24 * 3600;
/// Re-issuing a code is blocked while this marker lives.
const VERIFICATION_CODE_LIMIT_TTL_SECS: u64 = 60;

pub struct RedisUserCache {
    redis: Arc<RedisClient>,
}

impl RedisUserCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl UserEntityCache for RedisUserCache {
    async fn get(&self, user_id: i64) -> Result<Option<CachedUser>, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let key = keys::user_key(user_id);
        let value: Option<String> = conn.get(&key).await?;

        match value {
            Some(json) => {
                let user: CachedUser = serde_json::from_str(&json)?;
                let _: () = conn.expire(&key, USER_TTL_SECS as i64).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, record: &UserRecord) -> Result<CachedUser, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let user = CachedUser::from(record);
        let key = keys::user_key(user.id);
        let json = serde_json::to_string(&user)?;
        let _: () = conn.set_ex(key, json, USER_TTL_SECS).await?;

        Ok(user)
    }

    async fn update(&self, user: &CachedUser) -> Result<(), AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let key = keys::user_key(user.id);
        let json = serde_json::to_string(user)?;
        let _: () = conn.set_ex(key, json, USER_TTL_SECS).await?;

        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(keys::user_key(user_id)).await?;

        Ok(())
    }

    async fn set_verification_code(&self, user_id: i64, code: u32) -> Result<(), AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn
            .set_ex(
                keys::verification_code_key(user_id),
                code.to_string(),
                VERIFICATION_CODE_TTL_SECS,
            )
            .await?;
        let _: () = conn
            .set_ex(
                keys::verification_code_limit_key(user_id),
                code.to_string(),
                VERIFICATION_CODE_LIMIT_TTL_SECS,
            )
            .await?;

        Ok(())
    }

    async fn check_verification_code(&self, user_id: i64, code: u32) -> Result<bool, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let saved: Option<String> = conn.get(keys::verification_code_key(user_id)).await?;

        Ok(saved.is_some_and(|saved| saved == code.to_string()))
    }

    async fn check_verification_code_limit(&self, user_id: i64) -> Result<bool, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let marker: Option<String> = conn.get(keys::verification_code_limit_key(user_id)).await?;

        Ok(marker.is_some())
    }
}
