use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub access_token_lifetime_mins: i64,
    pub refresh_token_lifetime_mins: i64,
    pub pagination_items: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL")?,
            jwt_secret: env::var("JWT_SECRET")?,
            admin_email: env::var("ADMIN_EMAIL")?,
            access_token_lifetime_mins: env::var("ACCESS_TOKEN_LIFETIME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            refresh_token_lifetime_mins: env::var("REFRESH_TOKEN_LIFETIME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60 * 24 * 7),
            pagination_items: env::var("PAGINATION_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }
}
