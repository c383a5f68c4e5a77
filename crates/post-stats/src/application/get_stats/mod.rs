// crates/post-stats/src/application/get_stats/mod.rs

mod get_stats_command;
mod get_stats_dto;
mod get_stats_use_case;
#[cfg(test)]
mod get_stats_use_case_test;

pub use get_stats_command::{GetStatsBatchCommand, GetStatsCommand};
pub use get_stats_dto::PostStatsBatch;
pub use get_stats_use_case::GetStatsUseCase;
