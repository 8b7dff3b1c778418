mod auth;
mod error_handler;

pub use auth::{AdminUser, UnverifiedUser, VerifiedUser};
pub use error_handler::log_errors;
