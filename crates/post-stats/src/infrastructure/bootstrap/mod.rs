// crates/post-stats/src/infrastructure/bootstrap/mod.rs

mod post_interaction_service;
mod post_stats_components;
mod post_stats_worker;

pub use post_interaction_service::connect_post_interaction_service;
pub use post_stats_components::PostStatsComponents;
pub use post_stats_worker::run_post_stats_worker;
