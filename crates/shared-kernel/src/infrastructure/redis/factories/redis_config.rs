// crates/shared-kernel/src/infrastructure/redis/factories/redis_config.rs

use crate::errors::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub max_clients: usize,
}

impl RedisConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            max_clients: std::env::var("REDIS_MAX_CLIENTS")
                .unwrap_or_else(|_| "16".to_string())
                .parse()
                .map_err(|_| AppError::new(ErrorCode::InternalError, "Invalid REDIS_MAX_CLIENTS"))?,
        })
    }
}
