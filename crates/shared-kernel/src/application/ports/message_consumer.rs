// crates/shared-kernel/src/application/ports/message_consumer.rs

use crate::errors::AppResult;
use async_trait::async_trait;
use futures_util::future::BoxFuture;

/// Verdict du handler sur un message reçu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// Traité (ou définitivement inexploitable) : le broker peut l'oublier.
    Ack,
    /// Échec transitoire : le message doit être redélivré.
    Requeue,
}

pub type MessageHandler =
    Box<dyn Fn(Vec<u8>) -> BoxFuture<'static, Acknowledgement> + Send + Sync>;

#[async_trait]
pub trait MessageConsumer: Send + Sync {
    /// Boucle de consommation. Rend la main après l'arrêt demandé et le drain des messages en cours.
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()>;
}
