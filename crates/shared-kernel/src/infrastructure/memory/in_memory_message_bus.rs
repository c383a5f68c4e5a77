// crates/shared-kernel/src/infrastructure/memory/in_memory_message_bus.rs

use crate::application::ports::{Acknowledgement, MessageConsumer, MessageHandler, MessageProducer};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::{RetryConfig, invoke_handler};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Mutex, Semaphore, mpsc};
use tokio_util::sync::CancellationToken;

struct Delivery {
    payload: Vec<u8>,
    attempt: u32,
}

/// Broker en mémoire mono-topic : publication, consommation concurrente,
/// redélivrance des messages rejetés avec `Requeue`.
/// Sert aux tests et à l'exécution locale sans Kafka.
pub struct InMemoryMessageBus {
    topic: String,
    sender: mpsc::UnboundedSender<Delivery>,
    receiver: Mutex<mpsc::UnboundedReceiver<Delivery>>,
    shutdown_token: CancellationToken,
    concurrency_limit: Arc<Semaphore>,
    max_concurrency: usize,
    retry: RetryConfig,
    fail_publish: AtomicBool,
    published: AtomicUsize,
    acked: Arc<AtomicUsize>,
    requeued: Arc<AtomicUsize>,
}

impl InMemoryMessageBus {
    pub fn new(topic: impl Into<String>, max_concurrency: usize) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let max_concurrency = max_concurrency.max(1);

        Self {
            topic: topic.into(),
            sender,
            receiver: Mutex::new(receiver),
            shutdown_token: CancellationToken::new(),
            concurrency_limit: Arc::new(Semaphore::new(max_concurrency)),
            max_concurrency,
            retry: RetryConfig {
                initial_backoff_ms: 5,
                max_backoff_ms: 200,
            },
            fail_publish: AtomicBool::new(false),
            published: AtomicUsize::new(0),
            acked: Arc::new(AtomicUsize::new(0)),
            requeued: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown_token = token;
        self
    }

    pub fn stop(&self) {
        log::info!("Signaling in-memory consumer to stop...");
        self.shutdown_token.cancel();
    }

    /// Simule un broker injoignable côté publication.
    pub fn fail_publish(&self, fail: bool) {
        self.fail_publish.store(fail, Ordering::SeqCst);
    }

    pub fn published(&self) -> usize {
        self.published.load(Ordering::SeqCst)
    }

    pub fn acked(&self) -> usize {
        self.acked.load(Ordering::SeqCst)
    }

    pub fn requeued(&self) -> usize {
        self.requeued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageProducer for InMemoryMessageBus {
    async fn publish(&self, _key: &str, payload: &[u8]) -> AppResult<()> {
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(AppError::new(
                ErrorCode::ServiceUnavailable,
                "in-memory broker unavailable",
            ));
        }

        self.sender
            .send(Delivery {
                payload: payload.to_vec(),
                attempt: 0,
            })
            .map_err(|_| AppError::new(ErrorCode::InternalError, "in-memory bus closed"))?;

        self.published.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl MessageConsumer for InMemoryMessageBus {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        if topic != self.topic {
            return Err(AppError::new(
                ErrorCode::ValidationFailed,
                format!("unknown topic '{topic}' (bus serves '{}')", self.topic),
            ));
        }

        // Un seul consommateur actif à la fois
        let mut receiver = self.receiver.lock().await;
        let handler = Arc::new(handler);

        while !self.shutdown_token.is_cancelled() {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                delivery = receiver.recv() => {
                    let Some(delivery) = delivery else { break };

                    let permit = self.concurrency_limit.clone().acquire_owned().await
                        .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

                    let h = Arc::clone(&handler);
                    let sender = self.sender.clone();
                    let retry = self.retry;
                    let acked = Arc::clone(&self.acked);
                    let requeued = Arc::clone(&self.requeued);

                    tokio::spawn(async move {
                        match invoke_handler(&h, delivery.payload.clone()).await {
                            Acknowledgement::Ack => {
                                acked.fetch_add(1, Ordering::SeqCst);
                            }
                            Acknowledgement::Requeue => {
                                requeued.fetch_add(1, Ordering::SeqCst);
                                tokio::time::sleep(retry.backoff(delivery.attempt)).await;
                                // Retour en fin de file, repris par la prochaine consommation
                                let _ = sender.send(Delivery {
                                    payload: delivery.payload,
                                    attempt: delivery.attempt.saturating_add(1),
                                });
                            }
                        }
                        drop(permit);
                    });
                }
            }
        }

        // Drain : on attend la fin des handlers en vol
        let _ = self
            .concurrency_limit
            .acquire_many(self.max_concurrency as u32)
            .await;

        log::info!("🛑 In-memory consumer loop stopped.");
        Ok(())
    }
}
