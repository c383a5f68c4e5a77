// crates/post-stats/src/domain/events/mod.rs

mod stats_event;

pub use stats_event::{StatsEvent, StatsEventType, StatsField};
