// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use crate::application::ports::{Acknowledgement, MessageConsumer, MessageHandler};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::{OffsetTracker, RetryConfig, invoke_handler};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::Message;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Consommateur Kafka "at-least-once".
///
/// Les offsets ne sont stockés qu'après `Ack`, jamais au-delà du plus petit message
/// encore en traitement sur la partition. Un `Requeue` est redélivré en mémoire avec
/// backoff ; à l'arrêt, un message non acquitté sera relu au prochain démarrage.
pub struct KafkaMessageConsumer {
    client_config: ClientConfig,
    shutdown_token: CancellationToken,
    // Limite le nombre de messages traités en parallèle (prefetch)
    concurrency_limit: Arc<Semaphore>,
    max_concurrency: usize,
    retry: RetryConfig,
}

impl KafkaMessageConsumer {
    pub fn new(brokers: &str, group_id: &str, max_concurrency: usize) -> Self {
        let max_concurrency = max_concurrency.max(1);

        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "true")
            .set("auto.commit.interval.ms", "5000") // Commit toutes les 5s
            // Seuls les offsets explicitement stockés (messages acquittés) sont commités
            .set("enable.auto.offset.store", "false")
            .set("auto.offset.reset", "earliest") // Ne rate rien au démarrage
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");

        Self {
            client_config: config,
            shutdown_token: CancellationToken::new(),
            concurrency_limit: Arc::new(Semaphore::new(max_concurrency)),
            max_concurrency,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Partage le signal d'arrêt avec le reste du worker.
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown_token = token;
        self
    }

    pub fn stop(&self) {
        log::info!("Signaling Kafka consumer to stop...");
        self.shutdown_token.cancel();
    }
}

#[async_trait]
impl MessageConsumer for KafkaMessageConsumer {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        let consumer: Arc<StreamConsumer> = Arc::new(self.client_config.create()?);
        consumer
            .subscribe(&[topic])
            .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

        log::info!("🎧 Kafka consumer subscribed to '{}'", topic);

        let handler = Arc::new(handler);
        let tracker = Arc::new(OffsetTracker::new());
        let topic: Arc<str> = Arc::from(topic);

        while !self.shutdown_token.is_cancelled() {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = consumer.recv() => {
                    // On extrait les données possédées avant tout await
                    let (partition, offset, payload) = match result {
                        Ok(message) => (
                            message.partition(),
                            message.offset(),
                            message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
                        ),
                        Err(e) => {
                            log::error!("Kafka receive error: {}", e);
                            continue;
                        }
                    };

                    let permit = self.concurrency_limit.clone().acquire_owned().await
                        .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

                    tracker.begin(partition, offset);

                    let h = Arc::clone(&handler);
                    let tracker = Arc::clone(&tracker);
                    let consumer = Arc::clone(&consumer);
                    let topic = Arc::clone(&topic);
                    let token = self.shutdown_token.clone();
                    let retry = self.retry;

                    tokio::spawn(async move {
                        let mut attempt = 0u32;
                        loop {
                            match invoke_handler(&h, payload.clone()).await {
                                Acknowledgement::Ack => break,
                                Acknowledgement::Requeue => {
                                    let delay = retry.backoff(attempt);
                                    attempt = attempt.saturating_add(1);
                                    log::warn!(
                                        "🔁 Requeue {}[{}]@{} (attempt {}, retry in {:?})",
                                        topic, partition, offset, attempt, delay
                                    );

                                    tokio::select! {
                                        _ = token.cancelled() => {
                                            // Offset non stocké : relu au prochain démarrage
                                            log::warn!("Shutdown: leaving {}[{}]@{} unacknowledged", topic, partition, offset);
                                            drop(permit);
                                            return;
                                        }
                                        _ = tokio::time::sleep(delay) => {}
                                    }
                                }
                            }
                        }

                        if let Some(next) = tracker.complete(partition, offset) {
                            if let Err(e) = consumer.store_offset(&topic, partition, next) {
                                log::error!("❌ Failed to store offset {}[{}]@{}: {}", topic, partition, next, e);
                            }
                        }
                        drop(permit);
                    });
                }
            }
        }

        // Drain : on attend la fin des handlers en vol avant le dernier commit
        let _ = self
            .concurrency_limit
            .acquire_many(self.max_concurrency as u32)
            .await;

        if let Err(e) = consumer.commit_consumer_state(CommitMode::Sync) {
            log::warn!("Final offset commit skipped: {}", e);
        }

        log::info!("🛑 Kafka consumer loop stopped.");
        Ok(())
    }
}
