use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::AppState;

pub mod handler;
pub mod model;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(handler::me))
        .route("/users", get(handler::users))
        .route("/users/{user_id}", get(handler::user))
        .route("/users/{user_id}", patch(handler::update_user))
        .route("/users/{user_id}", delete(handler::delete_user))
}
