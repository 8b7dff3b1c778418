//! Business logic on top of the union layer. Services never talk to the
//! store or cache repositories for entity state; the union mediates all of
//! that. Direct repository access is limited to what has no union
//! counterpart (email existence, row count, verification codes).

pub mod auth;
pub mod users;
