use serde::{Deserialize, Serialize};

use crate::database::models::UserRecord;

/// Cached projection of a user record. Everything the API ever returns about
/// a user; the password hash never leaves the database layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verified: bool,
    pub is_admin: bool,
}

impl From<&UserRecord> for CachedUser {
    fn from(record: &UserRecord) -> Self {
        CachedUser {
            id: record.id,
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            verified: record.verified,
            is_admin: record.is_admin,
        }
    }
}

/// One cached page of the user listing, stored as a hash field keyed by
/// page number.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<CachedUser>,
}
