// crates/post-stats/src/application/workers/stats_event_consumer.rs

use crate::domain::events::StatsEvent;
use crate::domain::repositories::PostStatsCache;
use futures_util::FutureExt;
use shared_kernel::application::ports::{Acknowledgement, MessageHandler};
use std::sync::Arc;
use std::time::Duration;

/// Durée de vie du marqueur "événement traité", bien au-delà de la fenêtre de redélivrance
pub const EVENT_MARKER_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Applique les événements de compteurs au cache chaud, une seule fois par `event_id`.
pub struct StatsEventConsumer {
    cache: Arc<dyn PostStatsCache>,
    marker_ttl: Duration,
}

impl StatsEventConsumer {
    pub fn new(cache: Arc<dyn PostStatsCache>) -> Self {
        Self {
            cache,
            marker_ttl: EVENT_MARKER_TTL,
        }
    }

    pub fn with_marker_ttl(mut self, ttl: Duration) -> Self {
        self.marker_ttl = ttl;
        self
    }

    /// received -> processed -> Ack, ou received -> failed -> Requeue
    pub async fn handle(&self, payload: &[u8]) -> Acknowledgement {
        // 1. Un payload invalide ne le deviendra jamais : on l'écarte
        let event = match StatsEvent::from_bytes(payload) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(bytes = payload.len(), "dropping malformed stats event: {}", e);
                return Acknowledgement::Ack;
            }
        };

        let Some((field, delta)) = event.event_type.counter_delta() else {
            tracing::warn!(event_id = %event.event_id, "dropping stats event of unknown type");
            return Acknowledgement::Ack;
        };

        // 2. Incrément + dirty + marqueur en une seule opération atomique
        match self
            .cache
            .apply_event_once(&event.event_id, event.post_id, field, delta, self.marker_ttl)
            .await
        {
            Ok(true) => {
                tracing::debug!(event_id = %event.event_id, post_id = %event.post_id, "stats event applied");
                Acknowledgement::Ack
            }
            Ok(false) => {
                tracing::debug!(event_id = %event.event_id, "duplicate stats event ignored");
                Acknowledgement::Ack
            }
            Err(e) => {
                tracing::error!(event_id = %event.event_id, post_id = %event.post_id, "stats event apply failed, requeue: {}", e);
                Acknowledgement::Requeue
            }
        }
    }

    pub fn into_handler(self: Arc<Self>) -> MessageHandler {
        Box::new(move |payload: Vec<u8>| {
            let consumer = Arc::clone(&self);
            async move { consumer.handle(&payload).await }.boxed()
        })
    }
}
