// crates/post-stats/src/infrastructure/cache/post_stats_cache_repository.rs

use crate::domain::events::StatsField;
use crate::domain::repositories::PostStatsCache;
use crate::domain::value_objects::{PostStats, ReadViewer};
use crate::infrastructure::cache::cache_keys::{CacheKeys, FIELD_COLLECT, FIELD_LIKE, FIELD_READ};
use async_trait::async_trait;
use shared_kernel::domain::repositories::{CacheRepository, CounterHash, GuardedIncrement};
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// `PostStatsCache` au-dessus du cache générique du kernel (Redis en production).
pub struct PostStatsCacheRepository {
    cache: Arc<dyn CacheRepository>,
}

impl PostStatsCacheRepository {
    pub fn new(cache: Arc<dyn CacheRepository>) -> Self {
        Self { cache }
    }

    fn to_stats(post_id: PostId, hash: &CounterHash) -> PostStats {
        let field = |name: &str| hash.get(name).copied().unwrap_or(0);
        PostStats::from_signed(post_id, field(FIELD_LIKE), field(FIELD_COLLECT), field(FIELD_READ))
    }

    fn to_hash(stats: &PostStats) -> CounterHash {
        CounterHash::from([
            (FIELD_LIKE.to_string(), stats.like_count() as i64),
            (FIELD_COLLECT.to_string(), stats.collect_count() as i64),
            (FIELD_READ.to_string(), stats.read_count() as i64),
        ])
    }
}

#[async_trait]
impl PostStatsCache for PostStatsCacheRepository {
    async fn get(&self, post_id: PostId) -> AppResult<Option<PostStats>> {
        let found = self.get_many(&[post_id]).await?;
        Ok(found.get(&post_id).copied())
    }

    async fn get_many(&self, post_ids: &[PostId]) -> AppResult<HashMap<PostId, PostStats>> {
        let keys: Vec<String> = post_ids.iter().map(|id| CacheKeys::stats(*id)).collect();
        let hashes = self.cache.hash_get_many(&keys).await?;

        Ok(post_ids
            .iter()
            .zip(hashes.iter())
            // Hash vide = clé absente
            .filter(|(_, hash)| !hash.is_empty())
            .map(|(id, hash)| (*id, Self::to_stats(*id, hash)))
            .collect())
    }

    async fn set_many_if_absent(&self, stats: &[PostStats]) -> AppResult<usize> {
        let entries = stats
            .iter()
            .map(|s| (CacheKeys::stats(s.post_id()), Self::to_hash(s)))
            .collect();
        self.cache.hash_set_many_if_absent(entries).await
    }

    async fn apply_event_once(
        &self,
        event_id: &str,
        post_id: PostId,
        field: StatsField,
        delta: i64,
        marker_ttl: Duration,
    ) -> AppResult<bool> {
        self.cache
            .incr_once(GuardedIncrement {
                marker_key: CacheKeys::event(event_id),
                marker_ttl,
                hash_key: CacheKeys::stats(post_id),
                field: CacheKeys::field(field).to_string(),
                delta,
                dirty_set: CacheKeys::DIRTY_SET.to_string(),
                member: post_id.to_string(),
            })
            .await
    }

    async fn mark_dirty(&self, post_ids: &[PostId]) -> AppResult<()> {
        let members: Vec<String> = post_ids.iter().map(|id| id.to_string()).collect();
        self.cache.set_add(CacheKeys::DIRTY_SET, &members).await
    }

    async fn pop_dirty(&self, count: usize) -> AppResult<Vec<PostId>> {
        let members = self.cache.set_pop(CacheKeys::DIRTY_SET, count).await?;

        Ok(members
            .into_iter()
            .filter_map(|member| match member.parse::<PostId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(member = %member, "dropping invalid member from dirty set");
                    None
                }
            })
            .collect())
    }

    async fn claim_read(&self, post_id: PostId, viewer: &ReadViewer, ttl: Duration) -> AppResult<bool> {
        self.cache
            .set_if_absent(&CacheKeys::read_dedupe(post_id, viewer), ttl)
            .await
    }

    async fn try_acquire_flush_lock(&self, ttl: Duration) -> AppResult<bool> {
        self.cache.set_if_absent(CacheKeys::FLUSH_LOCK, ttl).await
    }
}
