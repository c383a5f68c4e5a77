// crates/post-stats/src/application/ports/stats_event_publisher.rs

use crate::domain::events::StatsEvent;
use async_trait::async_trait;
use shared_kernel::errors::AppResult;

/// Remise d'un événement au canal durable. Livraison "at-least-once".
/// Aucune relance interne : l'échec remonte immédiatement à l'appelant.
#[async_trait]
pub trait StatsEventPublisher: Send + Sync {
    async fn publish(&self, event: &StatsEvent) -> AppResult<()>;
}
