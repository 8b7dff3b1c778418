//! In-memory doubles for the store and cache repositories, used by the
//! union and service tests. Call counters make read paths observable.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;

use crate::AppState;
use crate::cache::models::CachedUser;
use crate::cache::repos::{UserEntityCache, UserPageCache};
use crate::config::Config;
use crate::database::models::{NewUser, UserPatch, UserRecord};
use crate::database::repos::UserStore;
use crate::error::AppError;
use crate::union::UserUnion;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".into(),
        redis_url: "redis://localhost".into(),
        jwt_secret: "test-secret".into(),
        admin_email: "admin@example.com".into(),
        access_token_lifetime_mins: 15,
        refresh_token_lifetime_mins: 60,
        pagination_items: 30,
        server_host: "127.0.0.1".into(),
        server_port: 3000,
    }
}

/// App state wired to the in-memory doubles below.
pub fn test_state() -> (
    std::sync::Arc<MemStore>,
    std::sync::Arc<MemEntityCache>,
    std::sync::Arc<MemPageCache>,
    AppState,
) {
    let store = std::sync::Arc::new(MemStore::default());
    let user_cache = std::sync::Arc::new(MemEntityCache::default());
    let users_cache = std::sync::Arc::new(MemPageCache::default());
    let union = std::sync::Arc::new(UserUnion::new(
        store.clone(),
        user_cache.clone(),
        users_cache.clone(),
    ));
    let state = AppState {
        config: test_config(),
        store: store.clone(),
        user_cache: user_cache.clone(),
        users_cache: users_cache.clone(),
        union,
    };
    (store, user_cache, users_cache, state)
}

#[derive(Default)]
pub struct MemStore {
    rows: Mutex<HashMap<i64, UserRecord>>,
    next_id: AtomicI64,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MemStore {
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn get(&self, user_id: i64) -> Result<UserRecord, AppError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<UserRecord, AppError> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|r| r.email == email)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UserRecord>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<UserRecord> = self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = UserRecord {
            id,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password: new_user.password,
            verified: false,
            is_admin: new_user.is_admin,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, user_id: i64, patch: UserPatch) -> Result<(), AppError> {
        if let Some(row) = self.rows.lock().unwrap().get_mut(&user_id) {
            if let Some(first_name) = patch.first_name {
                row.first_name = Some(first_name);
            }
            if let Some(last_name) = patch.last_name {
                row.last_name = Some(last_name);
            }
            if let Some(verified) = patch.verified {
                row.verified = verified;
            }
        }
        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        self.rows.lock().unwrap().remove(&user_id);
        Ok(())
    }

    async fn exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .any(|r| r.email == email))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn password_hash(&self, user_id: i64) -> Result<String, AppError> {
        self.rows
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|r| r.password.clone())
            .ok_or(AppError::NotFound)
    }
}

const CODE_TTL: Duration = Duration::from_secs(2 * 24 * 3600);
const CODE_LIMIT_TTL: Duration = Duration::from_secs(60);

#[derive(Default)]
pub struct MemEntityCache {
    entries: Mutex<HashMap<i64, CachedUser>>,
    codes: Mutex<HashMap<i64, (u32, Instant)>>,
    limits: Mutex<HashMap<i64, Instant>>,
}

impl MemEntityCache {
    /// Simulates TTL expiry of one entity entry.
    pub fn drop_entry(&self, user_id: i64) {
        self.entries.lock().unwrap().remove(&user_id);
    }

    /// Simulates the verification code's two-day TTL running out.
    pub fn expire_code(&self, user_id: i64) {
        self.codes.lock().unwrap().remove(&user_id);
    }

    /// Simulates the rate-limit marker's one-minute TTL running out.
    pub fn expire_limit(&self, user_id: i64) {
        self.limits.lock().unwrap().remove(&user_id);
    }
}

#[async_trait]
impl UserEntityCache for MemEntityCache {
    async fn get(&self, user_id: i64) -> Result<Option<CachedUser>, AppError> {
        Ok(self.entries.lock().unwrap().get(&user_id).cloned())
    }

    async fn set(&self, record: &UserRecord) -> Result<CachedUser, AppError> {
        let user = CachedUser::from(record);
        self.entries.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &CachedUser) -> Result<(), AppError> {
        self.entries.lock().unwrap().insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        self.entries.lock().unwrap().remove(&user_id);
        Ok(())
    }

    async fn set_verification_code(&self, user_id: i64, code: u32) -> Result<(), AppError> {
        let now = Instant::now();
        self.codes
            .lock()
            .unwrap()
            .insert(user_id, (code, now + CODE_TTL));
        self.limits
            .lock()
            .unwrap()
            .insert(user_id, now + CODE_LIMIT_TTL);
        Ok(())
    }

    async fn check_verification_code(&self, user_id: i64, code: u32) -> Result<bool, AppError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .get(&user_id)
            .is_some_and(|&(saved, expires)| expires > Instant::now() && saved == code))
    }

    async fn check_verification_code_limit(&self, user_id: i64) -> Result<bool, AppError> {
        Ok(self
            .limits
            .lock()
            .unwrap()
            .get(&user_id)
            .is_some_and(|&expires| expires > Instant::now()))
    }
}

#[derive(Default)]
pub struct MemPageCache {
    pages: Mutex<HashMap<i64, Vec<CachedUser>>>,
}

impl MemPageCache {
    pub fn cached_page_count(&self) -> usize {
        self.pages.lock().unwrap().len()
    }
}

#[async_trait]
impl UserPageCache for MemPageCache {
    async fn get(&self, page: i64) -> Result<Option<Vec<CachedUser>>, AppError> {
        Ok(self.pages.lock().unwrap().get(&page).cloned())
    }

    async fn set(&self, page: i64, records: &[UserRecord]) -> Result<Vec<CachedUser>, AppError> {
        let users: Vec<CachedUser> = records.iter().map(CachedUser::from).collect();
        self.pages.lock().unwrap().insert(page, users.clone());
        Ok(users)
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.pages.lock().unwrap().clear();
        Ok(())
    }
}
