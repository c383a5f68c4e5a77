// crates/post-stats/src/application/set_relation/set_relation_command.rs

use crate::domain::value_objects::{RelationKind, RelationStatus};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{PostId, UserId};

/// Like / Unlike / Collect / Uncollect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRelationCommand {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: RelationKind,
    pub status: RelationStatus,
}
