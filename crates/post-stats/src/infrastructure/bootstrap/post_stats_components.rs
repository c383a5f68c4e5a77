// crates/post-stats/src/infrastructure/bootstrap/post_stats_components.rs

use crate::application::PostInteractionService;
use crate::application::workers::{PostStatsWorker, StatsEventConsumer, StatsFlusher};
use crate::domain::repositories::{PostStatsCache, PostStatsRepository, RelationRepository};
use crate::infrastructure::cache::PostStatsCacheRepository;
use crate::infrastructure::config::PostStatsConfig;
use crate::infrastructure::messaging::BrokerStatsEventPublisher;
use crate::infrastructure::postgres::repositories::{
    PostgresPostStatsRepository, PostgresRelationRepository,
};
use shared_kernel::application::ports::{MessageConsumer, MessageProducer};
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::repositories::CacheRepository;
use sqlx::PgPool;
use std::sync::Arc;

/// Adaptateurs partagés entre le service d'interactions et le worker.
#[derive(Clone)]
pub struct PostStatsComponents {
    pub relations: Arc<dyn RelationRepository>,
    pub stats_repo: Arc<dyn PostStatsRepository>,
    pub cache: Arc<dyn PostStatsCache>,
}

impl PostStatsComponents {
    pub fn new(pool: PgPool, cache: Arc<dyn CacheRepository>) -> Self {
        Self {
            relations: Arc::new(PostgresRelationRepository::new(pool.clone())),
            stats_repo: Arc::new(PostgresPostStatsRepository::new(pool)),
            cache: Arc::new(PostStatsCacheRepository::new(cache)),
        }
    }

    pub fn interaction_service(&self, producer: Arc<dyn MessageProducer>) -> PostInteractionService {
        PostInteractionService::new(
            self.relations.clone(),
            self.stats_repo.clone(),
            self.cache.clone(),
            Arc::new(BrokerStatsEventPublisher::new(producer)),
            Arc::new(SystemClock),
        )
    }

    pub fn worker(&self, consumer: Arc<dyn MessageConsumer>, config: &PostStatsConfig) -> PostStatsWorker {
        let event_consumer =
            StatsEventConsumer::new(self.cache.clone()).with_marker_ttl(config.event_marker_ttl);
        let flusher = StatsFlusher::new(self.cache.clone(), self.stats_repo.clone(), config.flusher());

        PostStatsWorker::new(
            consumer,
            Arc::new(event_consumer),
            Arc::new(flusher),
            config.topic.clone(),
        )
    }
}
