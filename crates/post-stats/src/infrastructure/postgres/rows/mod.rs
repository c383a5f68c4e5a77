// crates/post-stats/src/infrastructure/postgres/rows/mod.rs

mod postgres_post_stats_row;

pub use postgres_post_stats_row::PostgresPostStatsRow;
