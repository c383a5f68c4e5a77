// crates/shared-kernel/src/infrastructure/handler_guard.rs

use crate::application::ports::{Acknowledgement, MessageHandler};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;

/// Exécute le handler ; une panique est traitée comme un `Requeue`.
pub(crate) async fn invoke_handler(handler: &MessageHandler, payload: Vec<u8>) -> Acknowledgement {
    match AssertUnwindSafe(async move { handler(payload).await })
        .catch_unwind()
        .await
    {
        Ok(ack) => ack,
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("💥 Message handler panicked, requeueing: {}", reason);
            Acknowledgement::Requeue
        }
    }
}
