// crates/post-stats/src/infrastructure/bootstrap/post_stats_worker.rs

use crate::infrastructure::bootstrap::PostStatsComponents;
use crate::infrastructure::config::PostStatsConfig;
use crate::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::domain::repositories::CacheRepository;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::kafka::KafkaMessageConsumer;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::redis::factories::RedisContext;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub async fn run_post_stats_worker() -> AppResult<()> {
    // 1. Logs (RUST_LOG, "info" par défaut)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("🚀 Starting Post Stats Worker...");

    // 2. Configuration
    let config = PostStatsConfig::from_env()?;

    // 3. Infrastructure
    let postgres = PostgresContext::builder()?.build().await?;
    run_postgres_migrations(&postgres.pool()).await?;

    let redis = RedisContext::builder()?.build().await?;
    let cache: Arc<dyn CacheRepository> = redis.repository();

    let shutdown = CancellationToken::new();
    let consumer = Arc::new(
        KafkaMessageConsumer::new(&config.brokers, &config.group_id, config.prefetch)
            .with_shutdown_token(shutdown.clone()),
    );

    let worker = PostStatsComponents::new(postgres.pool(), cache).worker(consumer, &config);

    // 4. Arrêt propre (Ctrl+C / SIGINT)
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("🛑 Shutdown signal received, stopping post stats worker...");
                signal_token.cancel();
            }
            Err(err) => {
                tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
            }
        }
    });

    tracing::info!(
        "✅ Worker configured: topic={}, prefetch={}, flush every {}ms (batch {})",
        config.topic,
        config.prefetch,
        config.flush_interval.as_millis(),
        config.flush_batch_size
    );

    worker.run(shutdown).await
}
