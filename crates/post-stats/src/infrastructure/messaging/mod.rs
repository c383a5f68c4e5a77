// crates/post-stats/src/infrastructure/messaging/mod.rs

mod broker_stats_event_publisher;

pub use broker_stats_event_publisher::BrokerStatsEventPublisher;
