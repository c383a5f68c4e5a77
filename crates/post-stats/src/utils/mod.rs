// crates/post-stats/src/utils/mod.rs

mod fixed_clock;
mod post_stats_repository_stub;
mod relation_repository_stub;
mod stats_event_publisher_stub;

pub use fixed_clock::FixedClock;
pub use post_stats_repository_stub::PostStatsRepositoryStub;
pub use relation_repository_stub::RelationRepositoryStub;
pub use stats_event_publisher_stub::StatsEventPublisherStub;
