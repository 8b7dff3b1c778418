use std::sync::Arc;

use crate::cache::models::CachedUser;
use crate::cache::repos::{UserEntityCache, UserPageCache};
use crate::database::models::{NewUser, UserPatch};
use crate::database::repos::UserStore;
use crate::error::AppError;
use crate::utils::verify_password;

/// Cache-aside coordinator for user entities.
///
/// Every write path goes store first, caches second: the store is the only
/// durable truth and the caches are disposable, so a crash between the two
/// steps leaves the cache merely stale (healed by TTL expiry or the next
/// write), never in disagreement with a committed store state. No locks
/// guard the multi-step sequences; two concurrent updates to the same user
/// may interleave and the last completed store write plus the last cache
/// write wins.
pub struct UserUnion {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn UserEntityCache>,
    pages: Arc<dyn UserPageCache>,
}

impl UserUnion {
    pub fn new(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn UserEntityCache>,
        pages: Arc<dyn UserPageCache>,
    ) -> Self {
        Self {
            store,
            cache,
            pages,
        }
    }

    /// Read-by-id: cache hit short-circuits the store; a miss reads the
    /// store (NotFound propagates) and repopulates the cache.
    pub async fn get(&self, user_id: i64) -> Result<CachedUser, AppError> {
        if let Some(user) = self.cache.get(user_id).await? {
            return Ok(user);
        }

        let record = self.store.get(user_id).await?;
        self.cache.set(&record).await
    }

    /// Read-by-email always hits the store (the cache has no email index),
    /// then warms the by-id cache entry so subsequent id reads are
    /// consistent.
    pub async fn get_by_email(&self, email: &str) -> Result<CachedUser, AppError> {
        let record = self.store.get_by_email(email).await?;
        self.cache.set(&record).await
    }

    /// Read-page. An empty cached page is never trusted as a negative
    /// result, only as "not yet populated", so it recomputes like a miss.
    pub async fn page(
        &self,
        page: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CachedUser>, AppError> {
        if let Some(users) = self.pages.get(page).await? {
            if !users.is_empty() {
                return Ok(users);
            }
        }

        let records = self.store.list(offset, limit).await?;
        self.pages.set(page, &records).await
    }

    /// Create: store commit, then wholesale page invalidation (a new row
    /// changes what every page means), then a by-id read to populate and
    /// return the entity cache entry.
    pub async fn create(&self, new_user: NewUser) -> Result<CachedUser, AppError> {
        let record = self.store.create(new_user).await?;
        self.pages.clear().await?;
        self.get(record.id).await
    }

    /// Update: store write, then the caller's already-mutated view into the
    /// entity cache, then page invalidation. A failed store write aborts
    /// before any cache mutation.
    pub async fn update(&self, user: &CachedUser, patch: UserPatch) -> Result<(), AppError> {
        self.store.update(user.id, patch).await?;
        self.cache.update(user).await?;
        self.pages.clear().await?;

        Ok(())
    }

    /// Delete: store first so a concurrent reader cannot repopulate an
    /// entry for a row that is about to vanish.
    pub async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        self.store.delete(user_id).await?;
        self.cache.delete(user_id).await?;
        self.pages.clear().await?;

        Ok(())
    }

    /// Password checks never touch the cache. A missing user, missing hash
    /// or failed verification all come back as `false`, not as errors.
    pub async fn verify_password(&self, user_id: i64, password: &str) -> Result<bool, AppError> {
        let hash = match self.store.password_hash(user_id).await {
            Ok(hash) => hash,
            Err(AppError::NotFound) => return Ok(false),
            Err(e) => return Err(e),
        };

        Ok(verify_password(password, &hash).unwrap_or(false))
    }
}
