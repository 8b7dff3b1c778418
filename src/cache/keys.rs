/// Base key for one cached user entity.
pub fn user_key(user_id: i64) -> String {
    format!("user:{}", user_id)
}

/// Sub-key holding the last issued verification code (2 day TTL).
pub fn verification_code_key(user_id: i64) -> String {
    format!("{}-verification-code", user_key(user_id))
}

/// Sub-key whose mere presence blocks re-issuing a code (1 minute TTL).
pub fn verification_code_limit_key(user_id: i64) -> String {
    format!("{}-verification-code-limit", user_key(user_id))
}

/// Hash key holding every cached page of the user listing. All pages live
/// under this one key so a single DEL invalidates the whole listing.
pub const USERS_PAGES_KEY: &str = "users";
