// crates/post-stats/src/application/workers/post_stats_worker.rs

use crate::application::workers::{StatsEventConsumer, StatsFlusher};
use shared_kernel::application::ports::MessageConsumer;
use shared_kernel::errors::AppResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Consommateur d'événements et flusher dans un même processus.
///
/// Les deux ne communiquent que via le cache et la base. `message_consumer` doit
/// être construit avec le même `CancellationToken` que celui passé à `run`.
pub struct PostStatsWorker {
    message_consumer: Arc<dyn MessageConsumer>,
    event_consumer: Arc<StatsEventConsumer>,
    flusher: Arc<StatsFlusher>,
    topic: String,
}

impl PostStatsWorker {
    pub fn new(
        message_consumer: Arc<dyn MessageConsumer>,
        event_consumer: Arc<StatsEventConsumer>,
        flusher: Arc<StatsFlusher>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            message_consumer,
            event_consumer,
            flusher,
            topic: topic.into(),
        }
    }

    pub async fn run(&self, shutdown: CancellationToken) -> AppResult<()> {
        tracing::info!(topic = %self.topic, "📊 Post stats worker starting");

        let flusher = Arc::clone(&self.flusher);
        let flusher_token = shutdown.clone();
        let flusher_task = tokio::spawn(async move { flusher.run(flusher_token).await });

        // Rend la main après l'arrêt et le drain des messages en vol
        let consumed = self
            .message_consumer
            .consume(&self.topic, Arc::clone(&self.event_consumer).into_handler())
            .await;

        // Arrêt anticipé du consommateur (ex: abonnement impossible) : on coupe aussi le flusher
        shutdown.cancel();
        if let Err(e) = flusher_task.await {
            tracing::error!("stats flusher task panicked: {}", e);
        }

        // Dernier passage pour ce qui a été appliqué pendant le drain.
        // Le lease posé par le dernier tick est peut-être encore valide : on ne le reprend pas.
        match self.flusher.drain_dirty().await {
            Ok(count) => tracing::info!("Final flush wrote {} post stats", count),
            Err(e) => tracing::warn!("Final flush skipped: {}", e),
        }

        tracing::info!("👋 Post stats worker exited");
        consumed
    }
}
