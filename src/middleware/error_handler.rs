use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

const LOGGED_BODY_LIMIT: usize = 1024;

/// Logs the status and body of 5xx responses before they leave the server.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;

    if response.status().is_server_error() {
        let (mut parts, body) = response.into_parts();
        let bytes = match to_bytes(body, LOGGED_BODY_LIMIT).await {
            Ok(b) => b,
            Err(e) => {
                error!("failed to read error response body: {e}");
                return Response::from_parts(parts, Body::empty());
            }
        };

        error!(
            "server error - status: {}, body: {}",
            parts.status,
            String::from_utf8_lossy(&bytes)
        );

        parts.headers.remove(axum::http::header::CONTENT_LENGTH);
        Response::from_parts(parts, Body::from(bytes))
    } else {
        response
    }
}
