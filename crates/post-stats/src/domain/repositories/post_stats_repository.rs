// crates/post-stats/src/domain/repositories/post_stats_repository.rs

use crate::domain::value_objects::PostStats;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::Result;

/// Stockage durable des compteurs (valeur "réglée").
#[async_trait]
pub trait PostStatsRepository: Send + Sync {
    /// Les posts sans ligne sont simplement absents du résultat.
    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> Result<Vec<PostStats>>;

    /// Insert-or-update par `post_id`, en une seule écriture.
    async fn upsert(&self, stats: &[PostStats]) -> Result<()>;
}
