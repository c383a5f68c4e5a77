// crates/post-stats/src/utils/fixed_clock.rs

use chrono::{DateTime, TimeZone, Utc};
use shared_kernel::clock::Clock;

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
