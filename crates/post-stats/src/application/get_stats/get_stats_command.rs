// crates/post-stats/src/application/get_stats/get_stats_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{PostId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStatsCommand {
    pub post_id: PostId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStatsBatchCommand {
    pub post_ids: Vec<PostId>,
    /// `UserId::ANONYMOUS` : pas de drapeaux utilisateur
    pub user_id: UserId,
}
