use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod union;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

use cache::repos::{RedisUserCache, RedisUsersCache, UserEntityCache, UserPageCache};
use config::Config;
use database::repos::{PgUserStore, UserStore};
use union::UserUnion;

/// Explicit dependency container, constructed once at startup and handed to
/// every handler through axum's state. Strict layering: repositories depend
/// on nothing above them, the union depends on the repositories, services
/// depend on the union.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn UserStore>,
    pub user_cache: Arc<dyn UserEntityCache>,
    pub users_cache: Arc<dyn UserPageCache>,
    pub union: Arc<UserUnion>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, redis: Arc<RedisClient>) -> Self {
        let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
        let user_cache: Arc<dyn UserEntityCache> = Arc::new(RedisUserCache::new(redis.clone()));
        let users_cache: Arc<dyn UserPageCache> = Arc::new(RedisUsersCache::new(redis));
        let union = Arc::new(UserUnion::new(
            store.clone(),
            user_cache.clone(),
            users_cache.clone(),
        ));

        AppState {
            config,
            store,
            user_cache,
            users_cache,
            union,
        }
    }
}
