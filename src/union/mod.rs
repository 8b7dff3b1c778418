//! Coordinators that reconcile the durable store with the cache
//! repositories. This is the only layer allowed to talk to both.

pub mod user;

pub use user::UserUnion;
