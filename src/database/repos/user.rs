use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{NewUser, UserPatch, UserRecord};
use crate::database::repos::UserStore;
use crate::error::AppError;

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, password, verified, is_admin, created_at";

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get(&self, user_id: i64) -> Result<UserRecord, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(AppError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<UserRecord, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(AppError::NotFound)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<UserRecord>, AppError> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (email, first_name, last_name, password, is_admin)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.email)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.password)
        .bind(new_user.is_admin)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, user_id: i64, patch: UserPatch) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                verified = COALESCE($4, verified)
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&patch.first_name)
        .bind(&patch.last_name)
        .bind(patch.verified)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists(&self, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn password_hash(&self, user_id: i64) -> Result<String, AppError> {
        let hash: Option<String> = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        hash.ok_or(AppError::NotFound)
    }
}
