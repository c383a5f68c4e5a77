// crates/post-stats/tests/common/in_memory_pipeline.rs

use post_stats::application::PostInteractionService;
use post_stats::application::workers::{
    FlusherConfig, PostStatsWorker, StatsEventConsumer, StatsFlusher,
};
use post_stats::domain::repositories::PostStatsCache;
use post_stats::domain::value_objects::PostStats;
use post_stats::infrastructure::cache::PostStatsCacheRepository;
use post_stats::infrastructure::messaging::BrokerStatsEventPublisher;
use post_stats::utils::{FixedClock, PostStatsRepositoryStub, RelationRepositoryStub};
use shared_kernel::domain::repositories::CacheRepositoryStub;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::memory::InMemoryMessageBus;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Service + worker complets, broker/cache/base en mémoire.
pub struct InMemoryPipeline {
    pub service: PostInteractionService,
    pub bus: Arc<InMemoryMessageBus>,
    pub cache_backend: Arc<CacheRepositoryStub>,
    pub store: Arc<PostStatsRepositoryStub>,
    pub relations: Arc<RelationRepositoryStub>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<AppResult<()>>>,
}

impl InMemoryPipeline {
    pub fn start() -> Self {
        let shutdown = CancellationToken::new();
        let bus = Arc::new(
            InMemoryMessageBus::new("post.stats", 8).with_shutdown_token(shutdown.clone()),
        );
        let cache_backend = Arc::new(CacheRepositoryStub::new());
        let cache: Arc<dyn PostStatsCache> =
            Arc::new(PostStatsCacheRepository::new(cache_backend.clone()));
        let store = Arc::new(PostStatsRepositoryStub::default());
        let relations = Arc::new(RelationRepositoryStub::default());

        let service = PostInteractionService::new(
            relations.clone(),
            store.clone(),
            cache.clone(),
            Arc::new(BrokerStatsEventPublisher::new(bus.clone())),
            Arc::new(FixedClock::default()),
        );

        let flusher = StatsFlusher::new(
            cache.clone(),
            store.clone(),
            FlusherConfig {
                interval: Duration::from_millis(30),
                batch_size: 100,
                lock_ttl: Duration::from_millis(20),
            },
        );
        let worker = PostStatsWorker::new(
            bus.clone(),
            Arc::new(StatsEventConsumer::new(cache)),
            Arc::new(flusher),
            "post.stats",
        );

        let token = shutdown.clone();
        let handle = tokio::spawn(async move { worker.run(token).await });

        Self {
            service,
            bus,
            cache_backend,
            store,
            relations,
            shutdown,
            worker: Some(handle),
        }
    }

    /// Attend que `count` messages aient été acquittés par le worker.
    pub async fn wait_acked(&self, count: usize) {
        wait_until(|| self.bus.acked() >= count).await;
    }

    /// Attend que la base contienne exactement `expected` pour le post.
    pub async fn wait_flushed(&self, expected: PostStats) {
        let post_id: PostId = expected.post_id();
        wait_until(|| self.store.row(post_id) == Some(expected)).await;
    }

    pub async fn stop(&mut self) -> AppResult<()> {
        self.shutdown.cancel();
        match self.worker.take() {
            Some(handle) => handle.await.expect("worker task panicked"),
            None => Ok(()),
        }
    }
}

async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
