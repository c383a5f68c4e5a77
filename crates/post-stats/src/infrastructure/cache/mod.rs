// crates/post-stats/src/infrastructure/cache/mod.rs

mod cache_keys;
mod post_stats_cache_repository;

pub use cache_keys::CacheKeys;
pub use post_stats_cache_repository::PostStatsCacheRepository;
