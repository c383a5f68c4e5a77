// crates/post-stats/src/application/ports/mod.rs

mod stats_event_publisher;

pub use stats_event_publisher::StatsEventPublisher;
