use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Durable user row. The single source of truth; caches hold only derived,
/// time-bounded projections of it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub verified: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied at creation time; the store assigns `id` and
/// `created_at`, and `verified` starts false.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: String,
    pub is_admin: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verified: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.verified.is_none()
    }
}
