// crates/post-stats/src/domain/value_objects/post_stats.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{Counter, PostId};

/// Compteurs agrégés d'un post.
/// Créés paresseusement au premier événement, jamais supprimés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    post_id: PostId,
    like_count: Counter,
    collect_count: Counter,
    read_count: Counter,
}

impl PostStats {
    /// Compteurs à zéro : post inconnu du cache comme de la base
    pub fn empty(post_id: PostId) -> Self {
        Self::new(post_id, 0, 0, 0)
    }

    pub fn new(post_id: PostId, like_count: u64, collect_count: u64, read_count: u64) -> Self {
        Self {
            post_id,
            like_count: Counter::from_raw(like_count),
            collect_count: Counter::from_raw(collect_count),
            read_count: Counter::from_raw(read_count),
        }
    }

    /// Reconstruction depuis un stockage signé (HINCRBY, BIGINT), négatifs saturés à 0
    pub fn from_signed(post_id: PostId, like_count: i64, collect_count: i64, read_count: i64) -> Self {
        Self {
            post_id,
            like_count: Counter::from_signed(like_count),
            collect_count: Counter::from_signed(collect_count),
            read_count: Counter::from_signed(read_count),
        }
    }

    // --- Getters ---

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn like_count(&self) -> u64 {
        self.like_count.value()
    }

    pub fn collect_count(&self) -> u64 {
        self.collect_count.value()
    }

    pub fn read_count(&self) -> u64 {
        self.read_count.value()
    }

    pub fn is_empty(&self) -> bool {
        self.like_count.is_zero() && self.collect_count.is_zero() && self.read_count.is_zero()
    }
}
