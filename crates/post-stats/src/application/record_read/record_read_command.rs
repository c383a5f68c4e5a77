// crates/post-stats/src/application/record_read/record_read_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{PostId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReadCommand {
    pub post_id: PostId,
    /// `UserId::ANONYMOUS` pour un lecteur non connecté
    pub user_id: UserId,
    pub ip: String,
    pub user_agent: String,
}
