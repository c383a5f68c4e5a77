// crates/shared-kernel/src/infrastructure/redis/repositories/mod.rs

mod redis_cache_repository;

pub use redis_cache_repository::RedisCacheRepository;
