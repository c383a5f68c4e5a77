// crates/shared-kernel/src/application/ports/message_producer.rs

use crate::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait MessageProducer: Send + Sync {
    /// Publie un payload déjà sérialisé sur le topic par défaut du producer.
    /// La clé fixe la partition : tous les messages d'une même clé restent ordonnés.
    /// Rend la main une fois le message acquitté par le broker.
    async fn publish(&self, key: &str, payload: &[u8]) -> AppResult<()>;
}
