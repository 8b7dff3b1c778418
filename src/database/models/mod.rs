pub mod user;

pub use user::{NewUser, UserPatch, UserRecord};
