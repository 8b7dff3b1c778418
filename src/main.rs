use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use auth_backend::{AppState, config::Config, database, middleware::log_errors, routes};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    // runs once before any request traffic
    database::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let redis_client =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    let state = AppState::new(config.clone(), pool, Arc::new(redis_client));

    let router = routes::router().layer(axum::middleware::from_fn(log_errors));

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding permissive CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let app = router.with_state(state.clone());

    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
