// crates/post-stats/src/infrastructure/messaging/broker_stats_event_publisher.rs

use crate::application::ports::StatsEventPublisher;
use crate::domain::events::StatsEvent;
use async_trait::async_trait;
use shared_kernel::application::ports::MessageProducer;
use shared_kernel::errors::AppResult;
use std::sync::Arc;

/// Publie les événements de stats sur le broker, clé = `post_id`.
/// Tous les événements d'un post restent ainsi sur la même partition.
pub struct BrokerStatsEventPublisher {
    producer: Arc<dyn MessageProducer>,
}

impl BrokerStatsEventPublisher {
    pub fn new(producer: Arc<dyn MessageProducer>) -> Self {
        Self { producer }
    }
}

#[async_trait]
impl StatsEventPublisher for BrokerStatsEventPublisher {
    async fn publish(&self, event: &StatsEvent) -> AppResult<()> {
        let payload = event.to_bytes()?;
        let key = event.post_id.value().to_string();

        self.producer.publish(&key, &payload).await?;

        tracing::debug!(
            event_id = %event.event_id,
            post_id = %event.post_id,
            "stats event published"
        );
        Ok(())
    }
}
