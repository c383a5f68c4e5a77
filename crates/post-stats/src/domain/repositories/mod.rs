// crates/post-stats/src/domain/repositories/mod.rs

mod post_stats_cache;
mod post_stats_repository;
mod relation_repository;

pub use post_stats_cache::PostStatsCache;
pub use post_stats_repository::PostStatsRepository;
pub use relation_repository::RelationRepository;
