// crates/shared-kernel/src/infrastructure/retry.rs

use rand::Rng;
use std::time::Duration;

/// Politique de redélivrance (Exponential Backoff + Jitter) appliquée aux messages
/// rejetés avec `Acknowledgement::Requeue`.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_backoff_ms: 100,
            max_backoff_ms: 30_000,
        }
    }
}

impl RetryConfig {
    /// Délai avant la tentative `attempt` (0 = première redélivrance).
    pub fn backoff(&self, attempt: u32) -> Duration {
        // 2^attempt * base, borné pour ne pas déborder
        let base_backoff = self
            .initial_backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt.min(20)))
            .min(self.max_backoff_ms);

        // Jitter (entre 0 et 25% de la base) pour désynchroniser les workers
        let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);

        Duration::from_millis(base_backoff.saturating_add(jitter).min(self.max_backoff_ms))
    }
}
