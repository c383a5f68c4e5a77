// crates/post-stats/src/application/workers/stats_flusher.rs

use crate::domain::repositories::{PostStatsCache, PostStatsRepository};
use crate::domain::value_objects::PostStats;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::{AppResult, infra_err};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy)]
pub struct FlusherConfig {
    pub interval: Duration,
    pub batch_size: usize,
    pub lock_ttl: Duration,
}

impl Default for FlusherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            batch_size: 100,
            lock_ttl: Duration::from_secs(4),
        }
    }
}

/// Write-behind : synchronise périodiquement les posts "dirty" du cache vers la base.
pub struct StatsFlusher {
    cache: Arc<dyn PostStatsCache>,
    stats_repo: Arc<dyn PostStatsRepository>,
    config: FlusherConfig,
}

impl StatsFlusher {
    pub fn new(
        cache: Arc<dyn PostStatsCache>,
        stats_repo: Arc<dyn PostStatsRepository>,
        config: FlusherConfig,
    ) -> Self {
        Self {
            cache,
            stats_repo,
            config: FlusherConfig {
                batch_size: config.batch_size.max(1),
                ..config
            },
        }
    }

    pub async fn run(&self, shutdown: CancellationToken) {
        tracing::info!(
            interval_ms = self.config.interval.as_millis() as u64,
            batch_size = self.config.batch_size,
            "Stats flusher started"
        );

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = sleep(self.config.interval) => {}
            }

            // Un tick entamé va à son terme
            match self.flush_once().await {
                Ok(0) => {}
                Ok(count) => tracing::info!("Flushed {} post stats", count),
                Err(e) => tracing::error!("Stats flush aborted: {}", e),
            }
        }

        tracing::info!("Stats flusher stopped gracefully");
    }

    /// Un tick complet. Renvoie le nombre de posts écrits en base.
    pub async fn flush_once(&self) -> AppResult<usize> {
        if !self.cache.try_acquire_flush_lock(self.config.lock_ttl).await? {
            tracing::debug!("flush lock held elsewhere, skipping tick");
            return Ok(0);
        }

        self.drain_dirty().await
    }

    /// Vide le set dirty sans prendre le lease.
    ///
    /// Le pop est atomique : deux drains concurrents ne partagent aucun post, et
    /// un post écrit deux fois l'est avec la valeur courante du cache.
    pub async fn drain_dirty(&self) -> AppResult<usize> {
        let mut flushed = 0;
        loop {
            let post_ids = self.cache.pop_dirty(self.config.batch_size).await?;
            if post_ids.is_empty() {
                break;
            }

            match self.flush_batch(&post_ids).await {
                Ok(count) => flushed += count,
                Err(e) => {
                    self.restore_dirty(&post_ids).await;
                    return Err(e);
                }
            }
        }

        Ok(flushed)
    }

    async fn flush_batch(&self, post_ids: &[PostId]) -> AppResult<usize> {
        let cached = self.cache.get_many(post_ids).await?;

        let rows: Vec<PostStats> = post_ids
            .iter()
            .filter_map(|id| cached.get(id).copied())
            .collect();

        if rows.len() < post_ids.len() {
            tracing::warn!(
                skipped = post_ids.len() - rows.len(),
                "dirty posts missing from cache, nothing to flush for them"
            );
        }
        if rows.is_empty() {
            return Ok(0);
        }

        self.stats_repo.upsert(&rows).await.map_err(infra_err)?;
        Ok(rows.len())
    }

    /// Le lot retiré du set est remis en dirty pour le prochain tick.
    async fn restore_dirty(&self, post_ids: &[PostId]) {
        if let Err(e) = self.cache.mark_dirty(post_ids).await {
            tracing::error!(count = post_ids.len(), "failed to restore dirty posts: {}", e);
        }
    }
}
