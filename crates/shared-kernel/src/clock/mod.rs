// crates/shared-kernel/src/clock/mod.rs

mod system;

pub use system::SystemClock;

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
