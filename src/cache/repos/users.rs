use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::USERS_PAGES_KEY;
use crate::cache::models::{CachedUser, UsersPage};
use crate::cache::repos::UserPageCache;
use crate::database::models::UserRecord;
use crate::error::AppError;

/// One TTL for the whole listing, refreshed on any page read or write.
const PAGES_TTL_SECS: i64 = 3600;

pub struct RedisUsersCache {
    redis: Arc<RedisClient>,
}

impl RedisUsersCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl UserPageCache for RedisUsersCache {
    async fn get(&self, page: i64) -> Result<Option<Vec<CachedUser>>, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let value: Option<String> = conn.hget(USERS_PAGES_KEY, page.to_string()).await?;

        match value {
            Some(json) => {
                let cached: UsersPage = serde_json::from_str(&json)?;
                let _: () = conn.expire(USERS_PAGES_KEY, PAGES_TTL_SECS).await?;
                Ok(Some(cached.users))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, page: i64, records: &[UserRecord]) -> Result<Vec<CachedUser>, AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let users: Vec<CachedUser> = records.iter().map(CachedUser::from).collect();
        let json = serde_json::to_string(&UsersPage {
            users: users.clone(),
        })?;

        let _: () = conn.hset(USERS_PAGES_KEY, page.to_string(), json).await?;
        let _: () = conn.expire(USERS_PAGES_KEY, PAGES_TTL_SECS).await?;

        Ok(users)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(USERS_PAGES_KEY).await?;

        Ok(())
    }
}
