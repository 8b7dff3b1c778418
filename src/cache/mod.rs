pub mod keys;
pub mod models;
pub mod repos;

pub use models::{CachedUser, UsersPage};
pub use repos::{RedisUserCache, RedisUsersCache, UserEntityCache, UserPageCache};
