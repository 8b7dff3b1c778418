use serde::{Deserialize, Serialize};

use crate::cache::models::CachedUser;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: CachedUser,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub next: bool,
    pub previous: bool,
    pub count: i64,
    pub data: Vec<CachedUser>,
}

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}
