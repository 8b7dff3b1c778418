use async_trait::async_trait;

use crate::database::models::{NewUser, UserPatch, UserRecord};
use crate::error::AppError;

mod user;

pub use user::PgUserStore;

/// Narrow repository interface over the durable store. Only the union layer
/// and the services above it ever see this; handlers never touch it.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `AppError::NotFound` if the row is absent.
    async fn get(&self, user_id: i64) -> Result<UserRecord, AppError>;

    /// Fails with `AppError::NotFound` if the row is absent.
    async fn get_by_email(&self, email: &str) -> Result<UserRecord, AppError>;

    /// One listing page in the store's default order.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UserRecord>, AppError>;

    /// Inserts and returns the row as the store committed it (id and
    /// created_at assigned).
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, AppError>;

    /// Applies only the fields present in the patch.
    async fn update(&self, user_id: i64, patch: UserPatch) -> Result<(), AppError>;

    async fn delete(&self, user_id: i64) -> Result<(), AppError>;

    async fn exists(&self, email: &str) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Fails with `AppError::NotFound` if the row is absent.
    async fn password_hash(&self, user_id: i64) -> Result<String, AppError>;
}
