// crates/shared-kernel/src/infrastructure/redis/factories/redis_context_builder.rs

use crate::errors::AppResult;
use crate::infrastructure::redis::factories::{RedisConfig, RedisContext};

pub struct RedisContextBuilder {
    pub(crate) url: String,
    pub(crate) max_clients: usize,
}

impl Default for RedisContextBuilder {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_clients: 16,
        }
    }
}

impl RedisContextBuilder {
    /// Lit `REDIS_URL` et `REDIS_MAX_CLIENTS`.
    pub fn new() -> AppResult<Self> {
        let config = RedisConfig::from_env()?;
        Ok(Self::default().with_config(config))
    }

    pub fn with_config(self, config: RedisConfig) -> Self {
        self.with_url(config.url).with_max_clients(config.max_clients)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_max_clients(mut self, max: usize) -> Self {
        self.max_clients = max;
        self
    }

    pub async fn build(self) -> AppResult<RedisContext> {
        RedisContext::restore(self).await
    }
}
