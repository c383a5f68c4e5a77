// crates/post-stats/src/application/get_stats/get_stats_dto.rs

use crate::domain::value_objects::{PostStats, PostUserStats};
use serde::Serialize;
use shared_kernel::domain::value_objects::PostId;
use std::collections::HashMap;

/// Chaque post demandé a une entrée dans les deux maps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostStatsBatch {
    pub stats: HashMap<PostId, PostStats>,
    pub user_stats: HashMap<PostId, PostUserStats>,
}

impl PostStatsBatch {
    pub fn stats_for(&self, post_id: PostId) -> PostStats {
        self.stats
            .get(&post_id)
            .copied()
            .unwrap_or_else(|| PostStats::empty(post_id))
    }

    pub fn user_stats_for(&self, post_id: PostId) -> PostUserStats {
        self.user_stats.get(&post_id).copied().unwrap_or_default()
    }
}
