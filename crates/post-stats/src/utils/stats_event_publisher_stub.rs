// crates/post-stats/src/utils/stats_event_publisher_stub.rs

use crate::application::ports::StatsEventPublisher;
use crate::domain::events::StatsEvent;
use async_trait::async_trait;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct StatsEventPublisherStub {
    pub published: Mutex<Vec<StatsEvent>>,
    pub fail: AtomicBool,
}

impl StatsEventPublisherStub {
    pub fn failing() -> Self {
        Self {
            fail: AtomicBool::new(true),
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<StatsEvent> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsEventPublisher for StatsEventPublisherStub {
    async fn publish(&self, event: &StatsEvent) -> AppResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::new(
                ErrorCode::ServiceUnavailable,
                "broker unavailable",
            ));
        }
        self.published.lock().unwrap().push(event.clone());
        Ok(())
    }
}
