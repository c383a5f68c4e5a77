// crates/shared-kernel/src/infrastructure/kafka/kafka_message_producer.rs

use crate::application::ports::MessageProducer;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::time::Duration;

pub struct KafkaMessageProducer {
    producer: FutureProducer,
    default_topic: String,
}

impl KafkaMessageProducer {
    pub fn new(brokers: &str, default_topic: impl Into<String>) -> AppResult<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            // Un message acquitté est répliqué : aucune perte possible côté broker
            .set("acks", "all")
            .set("enable.idempotence", "true")
            .set("compression.type", "snappy")
            .set("linger.ms", "5")
            .create()
            .map_err(|e| {
                AppError::new(ErrorCode::InternalError, format!("Kafka config error: {e}"))
            })?;

        Ok(Self {
            producer,
            default_topic: default_topic.into(),
        })
    }
}

#[async_trait]
impl MessageProducer for KafkaMessageProducer {
    async fn publish(&self, key: &str, payload: &[u8]) -> AppResult<()> {
        let record = FutureRecord::to(&self.default_topic)
            .payload(payload)
            .key(key);

        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(e, _)| AppError::from(e))?;

        Ok(())
    }
}
