// crates/post-stats/src/infrastructure/config/mod.rs

mod post_stats_config;

pub use post_stats_config::PostStatsConfig;
