// crates/post-stats/src/application/mod.rs

pub mod get_stats;
pub mod ports;
pub mod record_read;
pub mod set_relation;
pub mod workers;

mod post_interaction_service;

pub use post_interaction_service::PostInteractionService;
