// crates/post-stats/src/application/post_interaction_service.rs

use crate::application::get_stats::{
    GetStatsBatchCommand, GetStatsCommand, GetStatsUseCase, PostStatsBatch,
};
use crate::application::ports::StatsEventPublisher;
use crate::application::record_read::{RecordReadCommand, RecordReadUseCase};
use crate::application::set_relation::{SetRelationCommand, SetRelationUseCase};
use crate::domain::repositories::{PostStatsCache, PostStatsRepository, RelationRepository};
use crate::domain::value_objects::{PostStats, PostUserStats, RelationKind, RelationStatus};
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::errors::Result;
use std::sync::Arc;

/// Point d'entrée des interactions (like/collect/read) et des lectures de compteurs.
/// Chaque appel est annulable : abandonner le future interrompt l'opération.
pub struct PostInteractionService {
    set_relation: SetRelationUseCase,
    record_read: RecordReadUseCase,
    get_stats: GetStatsUseCase,
}

impl PostInteractionService {
    pub fn new(
        relations: Arc<dyn RelationRepository>,
        stats_repo: Arc<dyn PostStatsRepository>,
        cache: Arc<dyn PostStatsCache>,
        publisher: Arc<dyn StatsEventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            set_relation: SetRelationUseCase::new(
                relations.clone(),
                publisher.clone(),
                clock.clone(),
            ),
            record_read: RecordReadUseCase::new(cache.clone(), publisher, clock),
            get_stats: GetStatsUseCase::new(cache, stats_repo, relations),
        }
    }

    pub async fn like(&self, post_id: PostId, user_id: UserId) -> Result<()> {
        self.set(RelationKind::Like, RelationStatus::Active, post_id, user_id).await
    }

    pub async fn unlike(&self, post_id: PostId, user_id: UserId) -> Result<()> {
        self.set(RelationKind::Like, RelationStatus::Inactive, post_id, user_id).await
    }

    pub async fn collect(&self, post_id: PostId, user_id: UserId) -> Result<()> {
        self.set(RelationKind::Collect, RelationStatus::Active, post_id, user_id).await
    }

    pub async fn uncollect(&self, post_id: PostId, user_id: UserId) -> Result<()> {
        self.set(RelationKind::Collect, RelationStatus::Inactive, post_id, user_id).await
    }

    pub async fn read(
        &self,
        post_id: PostId,
        user_id: UserId,
        ip: &str,
        user_agent: &str,
    ) -> Result<()> {
        self.record_read
            .execute(RecordReadCommand {
                post_id,
                user_id,
                ip: ip.to_string(),
                user_agent: user_agent.to_string(),
            })
            .await?;
        Ok(())
    }

    pub async fn get_stats(&self, post_id: PostId, user_id: UserId) -> Result<(PostStats, PostUserStats)> {
        self.get_stats
            .execute(GetStatsCommand { post_id, user_id })
            .await
    }

    pub async fn get_stats_batch(&self, post_ids: &[PostId], user_id: UserId) -> Result<PostStatsBatch> {
        self.get_stats
            .execute_batch(GetStatsBatchCommand {
                post_ids: post_ids.to_vec(),
                user_id,
            })
            .await
    }

    async fn set(
        &self,
        kind: RelationKind,
        status: RelationStatus,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<()> {
        self.set_relation
            .execute(SetRelationCommand { post_id, user_id, kind, status })
            .await?;
        Ok(())
    }
}
