use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".into());
        Ok(Self {
            database_url,
            cors_origin,
        })
    }
}
