use async_trait::async_trait;

use crate::cache::models::CachedUser;
use crate::database::models::UserRecord;
use crate::error::AppError;

mod user;
mod users;

pub use user::RedisUserCache;
pub use users::RedisUsersCache;

/// Single-entity cache-aside store for one user, plus the verification-code
/// sub-keys that share its key namespace. Absence (never cached or TTL
/// expired) is reported as `Ok(None)`, not as an error.
#[async_trait]
pub trait UserEntityCache: Send + Sync {
    /// Returns the cached view and refreshes its TTL, or `None` on miss.
    async fn get(&self, user_id: i64) -> Result<Option<CachedUser>, AppError>;

    /// Projects a durable record into a cached view and stores it,
    /// unconditionally overwriting any existing entry.
    async fn set(&self, record: &UserRecord) -> Result<CachedUser, AppError>;

    /// Stores the given view verbatim with a fresh TTL. The caller has
    /// already applied its field mutations.
    async fn update(&self, user: &CachedUser) -> Result<(), AppError>;

    /// Removes the entry. Idempotent.
    async fn delete(&self, user_id: i64) -> Result<(), AppError>;

    /// Stores a verification code (2 day TTL) and a rate-limit marker
    /// (1 minute TTL) together, overwriting prior values.
    async fn set_verification_code(&self, user_id: i64, code: u32) -> Result<(), AppError>;

    /// True iff a code is stored and equals `code`. A missing or mismatched
    /// code is `false`, never an error. Codes are not consumed on success;
    /// they stay valid until their TTL runs out.
    async fn check_verification_code(&self, user_id: i64, code: u32) -> Result<bool, AppError>;

    /// True iff a code was issued within the last minute.
    async fn check_verification_code_limit(&self, user_id: i64) -> Result<bool, AppError>;
}

/// Page-indexed cache-aside store for the user listing. Pages share one
/// redis key (and therefore one TTL); any write to any user invalidates the
/// whole mapping via `clear`.
#[async_trait]
pub trait UserPageCache: Send + Sync {
    /// Returns the cached page and refreshes the collection TTL, or `None`
    /// if the page was never cached or the collection expired.
    async fn get(&self, page: i64) -> Result<Option<Vec<CachedUser>>, AppError>;

    /// Projects the records and stores them under the given page number.
    async fn set(&self, page: i64, records: &[UserRecord]) -> Result<Vec<CachedUser>, AppError>;

    /// Drops every cached page at once. Idempotent.
    async fn clear(&self) -> Result<(), AppError>;
}
