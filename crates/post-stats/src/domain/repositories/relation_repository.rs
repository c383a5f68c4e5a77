// crates/post-stats/src/domain/repositories/relation_repository.rs

use crate::domain::value_objects::{RelationKind, RelationStatus};
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::errors::Result;
use std::collections::HashSet;

/// Relations like/collect, uniques par (post, utilisateur).
#[async_trait]
pub trait RelationRepository: Send + Sync {
    /// Upsert atomique du statut. Renvoie `true` uniquement si le statut a réellement changé.
    /// Désactiver une relation inexistante est un no-op (aucune ligne créée).
    async fn set_status(
        &self,
        kind: RelationKind,
        post_id: PostId,
        user_id: UserId,
        status: RelationStatus,
    ) -> Result<bool>;

    async fn has_active(&self, kind: RelationKind, post_id: PostId, user_id: UserId) -> Result<bool>;

    /// Sous-ensemble de `post_ids` pour lequel la relation de l'utilisateur est active.
    async fn find_active_post_ids(
        &self,
        kind: RelationKind,
        post_ids: &[PostId],
        user_id: UserId,
    ) -> Result<HashSet<PostId>>;
}
