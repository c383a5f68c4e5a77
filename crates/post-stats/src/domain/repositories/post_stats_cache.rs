// crates/post-stats/src/domain/repositories/post_stats_cache.rs

use crate::domain::events::StatsField;
use crate::domain::value_objects::{PostStats, ReadViewer};
use async_trait::async_trait;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::AppResult;
use std::collections::HashMap;
use std::time::Duration;

/// Cache chaud des compteurs : valeurs récentes, set "dirty" et marqueurs de dédoublonnage.
#[async_trait]
pub trait PostStatsCache: Send + Sync {
    async fn get(&self, post_id: PostId) -> AppResult<Option<PostStats>>;

    /// Seuls les posts présents dans le cache figurent dans la map.
    async fn get_many(&self, post_ids: &[PostId]) -> AppResult<HashMap<PostId, PostStats>>;

    /// Backfill depuis le stockage durable : seuls les posts absents du cache sont écrits,
    /// un compteur déjà présent (ex: incrémenté entre-temps) n'est jamais écrasé.
    /// Renvoie le nombre de posts réellement écrits.
    async fn set_many_if_absent(&self, stats: &[PostStats]) -> AppResult<usize>;

    /// Applique le delta d'un événement une seule fois : incrément atomique,
    /// marquage dirty du post puis pose du marqueur `event_id` (TTL `marker_ttl`).
    /// Renvoie `false` si l'événement avait déjà été appliqué.
    async fn apply_event_once(
        &self,
        event_id: &str,
        post_id: PostId,
        field: StatsField,
        delta: i64,
        marker_ttl: Duration,
    ) -> AppResult<bool>;

    async fn mark_dirty(&self, post_ids: &[PostId]) -> AppResult<()>;

    /// Retrait destructif d'au plus `count` posts du set dirty.
    async fn pop_dirty(&self, count: usize) -> AppResult<Vec<PostId>>;

    /// Pose le marqueur de lecture. `false` si une lecture récente existe déjà.
    async fn claim_read(&self, post_id: PostId, viewer: &ReadViewer, ttl: Duration) -> AppResult<bool>;

    /// Bail (clé à TTL) du flusher. Jamais relâché explicitement : le TTL fait foi.
    async fn try_acquire_flush_lock(&self, ttl: Duration) -> AppResult<bool>;
}
