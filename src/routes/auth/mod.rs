use axum::{Router, routing::post};

use crate::AppState;

pub mod handler;
pub mod model;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(handler::sign_up))
        .route(
            "/resend-verification-code",
            post(handler::resend_verification_code),
        )
        .route(
            "/check-verification-code",
            post(handler::check_verification_code),
        )
        .route("/refresh-token", post(handler::refresh_token))
        .route("/sign-in", post(handler::sign_in))
}
