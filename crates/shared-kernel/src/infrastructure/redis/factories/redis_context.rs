// crates/shared-kernel/src/infrastructure/redis/factories/redis_context.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::redis::factories::{RedisConfig, RedisContextBuilder};
use crate::infrastructure::redis::repositories::RedisCacheRepository;
use std::sync::Arc;

pub struct RedisContext {
    repository: Arc<RedisCacheRepository>,
    url: String,
    max_clients: usize,
}

impl RedisContext {
    pub fn builder() -> AppResult<RedisContextBuilder> {
        RedisContextBuilder::new()
    }

    pub fn builder_raw() -> RedisContextBuilder {
        RedisContextBuilder::default()
    }

    pub fn repository(&self) -> Arc<RedisCacheRepository> {
        self.repository.clone()
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn config(&self) -> RedisConfig {
        RedisConfig {
            url: self.url.clone(),
            max_clients: self.max_clients,
        }
    }

    pub(crate) async fn restore(builder: RedisContextBuilder) -> AppResult<Self> {
        let repository = RedisCacheRepository::new(&builder.url, builder.max_clients)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InfrastructureFailure,
                    format!("Failed to connect to Redis at {}: {}", builder.url, e),
                )
            })?;

        log::info!("✅ Redis connected ({} clients)", builder.max_clients);

        Ok(Self {
            repository: Arc::new(repository),
            url: builder.url,
            max_clients: builder.max_clients,
        })
    }
}
