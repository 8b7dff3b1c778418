use sqlx::PgPool;

pub mod models;
pub mod repos;

pub use repos::{PgUserStore, UserStore};

/// One-time schema setup, run from `main` before the server accepts
/// traffic. `IF NOT EXISTS` keeps restarts idempotent.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            first_name TEXT,
            last_name TEXT,
            password TEXT NOT NULL,
            verified BOOLEAN NOT NULL DEFAULT FALSE,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS users_email_idx ON users (email)")
        .execute(pool)
        .await?;

    Ok(())
}
