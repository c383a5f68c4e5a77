// crates/post-stats/src/infrastructure/bootstrap/post_interaction_service.rs

use crate::application::PostInteractionService;
use crate::infrastructure::bootstrap::PostStatsComponents;
use crate::infrastructure::config::PostStatsConfig;
use shared_kernel::domain::repositories::CacheRepository;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::kafka::KafkaMessageProducer;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::redis::factories::RedisContext;
use std::sync::Arc;

/// Monte le service d'interactions pour un processus hôte (API, gateway...).
/// Les logs et les migrations restent à la charge de l'appelant.
pub async fn connect_post_interaction_service() -> AppResult<PostInteractionService> {
    let config = PostStatsConfig::from_env()?;

    let postgres = PostgresContext::builder()?.build().await?;
    let redis = RedisContext::builder()?.build().await?;
    let cache: Arc<dyn CacheRepository> = redis.repository();

    let producer = Arc::new(KafkaMessageProducer::new(&config.brokers, config.topic.clone())?);

    tracing::info!("✅ Post interaction service connected (topic: {})", config.topic);
    Ok(PostStatsComponents::new(postgres.pool(), cache).interaction_service(producer))
}
