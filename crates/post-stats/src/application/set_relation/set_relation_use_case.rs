// crates/post-stats/src/application/set_relation/set_relation_use_case.rs

use crate::application::ports::StatsEventPublisher;
use crate::application::set_relation::SetRelationCommand;
use crate::domain::events::{StatsEvent, StatsEventType};
use crate::domain::repositories::RelationRepository;
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

pub struct SetRelationUseCase {
    relations: Arc<dyn RelationRepository>,
    publisher: Arc<dyn StatsEventPublisher>,
    clock: Arc<dyn Clock>,
}

impl SetRelationUseCase {
    pub fn new(
        relations: Arc<dyn RelationRepository>,
        publisher: Arc<dyn StatsEventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { relations, publisher, clock }
    }

    /// Renvoie `true` si la transition a eu lieu (et l'événement a été publié).
    pub async fn execute(&self, command: SetRelationCommand) -> Result<bool> {
        command.post_id.validate()?;
        if !command.user_id.is_authenticated() {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: format!("{} requires an authenticated user", command.kind),
            });
        }

        // 1. La relation est la source de vérité de la transition
        let changed = self
            .relations
            .set_status(command.kind, command.post_id, command.user_id, command.status)
            .await?;

        if !changed {
            return Ok(false);
        }

        // 2. Publication synchrone, sans compensation de la relation en cas d'échec
        let event = StatsEvent::new(
            StatsEventType::for_transition(command.kind, command.status),
            command.post_id,
            command.user_id,
            self.clock.now(),
        );

        self.publisher.publish(&event).await.map_err(|e| {
            tracing::error!(
                post_id = %command.post_id,
                user_id = %command.user_id,
                event_id = %event.event_id,
                "stats event publish failed after relation change: {}",
                e
            );
            DomainError::from(e)
        })?;

        Ok(true)
    }
}
