// crates/post-stats/src/domain/value_objects/post_user_stats.rs

use serde::{Deserialize, Serialize};

/// Vue (post, utilisateur) dérivée des tables de relation à la lecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUserStats {
    pub liked: bool,
    pub collected: bool,
}
