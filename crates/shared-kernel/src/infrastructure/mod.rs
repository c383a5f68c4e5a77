// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "kafka")]
pub mod kafka;

#[cfg(feature = "redis")]
pub mod redis;

pub mod memory;
mod handler_guard;
mod offset_tracker;
mod retry;

pub(crate) use handler_guard::invoke_handler;
pub use offset_tracker::OffsetTracker;
pub use retry::RetryConfig;
