// crates/post-stats/src/infrastructure/postgres/repositories/mod.rs

mod postgres_post_stats_repository;
mod postgres_relation_repository;

pub use postgres_post_stats_repository::PostgresPostStatsRepository;
pub use postgres_relation_repository::PostgresRelationRepository;
