// crates/post-stats/src/application/record_read/record_read_use_case.rs

use crate::application::ports::StatsEventPublisher;
use crate::application::record_read::RecordReadCommand;
use crate::domain::events::{StatsEvent, StatsEventType};
use crate::domain::repositories::PostStatsCache;
use crate::domain::value_objects::ReadViewer;
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Fenêtre pendant laquelle les lectures d'un même lecteur ne comptent qu'une fois
pub const READ_DEDUPE_TTL: Duration = Duration::from_secs(30);

pub struct RecordReadUseCase {
    cache: Arc<dyn PostStatsCache>,
    publisher: Arc<dyn StatsEventPublisher>,
    clock: Arc<dyn Clock>,
    dedupe_ttl: Duration,
}

impl RecordReadUseCase {
    pub fn new(
        cache: Arc<dyn PostStatsCache>,
        publisher: Arc<dyn StatsEventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            publisher,
            clock,
            dedupe_ttl: READ_DEDUPE_TTL,
        }
    }

    /// Renvoie `true` si la lecture a été comptée (événement publié).
    pub async fn execute(&self, command: RecordReadCommand) -> Result<bool> {
        command.post_id.validate()?;
        command.user_id.validate()?;

        let viewer = ReadViewer::resolve(command.user_id, &command.ip, &command.user_agent);

        let first_read = self
            .cache
            .claim_read(command.post_id, &viewer, self.dedupe_ttl)
            .await?;

        if !first_read {
            tracing::debug!(post_id = %command.post_id, "duplicate read suppressed");
            return Ok(false);
        }

        let event = StatsEvent::new(
            StatsEventType::Read,
            command.post_id,
            command.user_id,
            self.clock.now(),
        );

        self.publisher.publish(&event).await.map_err(|e| {
            tracing::error!(post_id = %command.post_id, "read event publish failed: {}", e);
            DomainError::from(e)
        })?;

        Ok(true)
    }
}
