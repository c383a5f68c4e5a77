// crates/post-stats/src/application/workers/mod.rs

mod post_stats_worker;
mod stats_event_consumer;
#[cfg(test)]
mod stats_event_consumer_test;
mod stats_flusher;

pub use post_stats_worker::PostStatsWorker;
pub use stats_event_consumer::StatsEventConsumer;
pub use stats_flusher::{FlusherConfig, StatsFlusher};
