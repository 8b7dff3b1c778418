use axum::Router;

use crate::AppState;

pub mod auth;
pub mod users;

/// Full REST surface, nested under `/rest`.
pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/rest",
        Router::new()
            .nest("/auth", auth::router())
            .nest("/users", users::router()),
    )
}
