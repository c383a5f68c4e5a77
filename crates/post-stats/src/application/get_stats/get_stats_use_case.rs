// crates/post-stats/src/application/get_stats/get_stats_use_case.rs

use crate::application::get_stats::{GetStatsBatchCommand, GetStatsCommand, PostStatsBatch};
use crate::domain::repositories::{PostStatsCache, PostStatsRepository, RelationRepository};
use crate::domain::value_objects::{PostStats, PostUserStats, RelationKind};
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::errors::Result;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct GetStatsUseCase {
    cache: Arc<dyn PostStatsCache>,
    stats_repo: Arc<dyn PostStatsRepository>,
    relations: Arc<dyn RelationRepository>,
}

impl GetStatsUseCase {
    pub fn new(
        cache: Arc<dyn PostStatsCache>,
        stats_repo: Arc<dyn PostStatsRepository>,
        relations: Arc<dyn RelationRepository>,
    ) -> Self {
        Self { cache, stats_repo, relations }
    }

    pub async fn execute(&self, command: GetStatsCommand) -> Result<(PostStats, PostUserStats)> {
        let batch = self
            .execute_batch(GetStatsBatchCommand {
                post_ids: vec![command.post_id],
                user_id: command.user_id,
            })
            .await?;

        Ok((
            batch.stats_for(command.post_id),
            batch.user_stats_for(command.post_id),
        ))
    }

    pub async fn execute_batch(&self, command: GetStatsBatchCommand) -> Result<PostStatsBatch> {
        let post_ids = dedupe(&command.post_ids);
        if post_ids.is_empty() {
            return Ok(PostStatsBatch::default());
        }

        let mut stats = self.load_counters(&post_ids).await;
        for id in &post_ids {
            stats.entry(*id).or_insert_with(|| PostStats::empty(*id));
        }

        let user_stats = self.load_user_flags(&post_ids, command.user_id).await?;

        Ok(PostStatsBatch { stats, user_stats })
    }

    /// Cache d'abord, puis stockage durable pour les manquants (avec backfill).
    /// Ne renvoie jamais d'erreur : la lecture se dégrade en compteurs à zéro.
    async fn load_counters(&self, post_ids: &[PostId]) -> HashMap<PostId, PostStats> {
        let mut stats = match self.cache.get_many(post_ids).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("stats cache lookup failed, falling back to store: {}", e);
                HashMap::new()
            }
        };

        let missing: Vec<PostId> = post_ids
            .iter()
            .filter(|id| !stats.contains_key(id))
            .copied()
            .collect();
        if missing.is_empty() {
            return stats;
        }

        let stored = match self.stats_repo.find_by_post_ids(&missing).await {
            Ok(rows) => rows,
            Err(e) => {
                // Rien à réinjecter : des zéros écraseraient des compteurs réels
                tracing::warn!(missing = missing.len(), "stats store lookup failed, serving zero counters: {}", e);
                return stats;
            }
        };

        let mut backfill: HashMap<PostId, PostStats> = missing
            .iter()
            .map(|id| (*id, PostStats::empty(*id)))
            .collect();
        for row in stored {
            if backfill.contains_key(&row.post_id()) {
                backfill.insert(row.post_id(), row);
            }
        }

        let backfill: Vec<PostStats> = backfill.into_values().collect();
        let written = self.backfill(&backfill).await;
        stats.extend(backfill.iter().map(|s| (s.post_id(), *s)));

        // Posts remplis entre-temps par le consommateur : la valeur du cache fait foi
        if written.is_some_and(|count| count < backfill.len()) {
            let ids: Vec<PostId> = backfill.iter().map(|s| s.post_id()).collect();
            if let Ok(fresh) = self.cache.get_many(&ids).await {
                stats.extend(fresh);
            }
        }
        stats
    }

    /// Écriture consultative, uniquement sur les clés absentes : le résultat est journalisé, jamais propagé.
    async fn backfill(&self, stats: &[PostStats]) -> Option<usize> {
        match self.cache.set_many_if_absent(stats).await {
            Ok(written) => Some(written),
            Err(e) => {
                tracing::warn!(count = stats.len(), "stats cache backfill skipped: {}", e);
                None
            }
        }
    }

    async fn load_user_flags(
        &self,
        post_ids: &[PostId],
        user_id: UserId,
    ) -> Result<HashMap<PostId, PostUserStats>> {
        if !user_id.is_authenticated() {
            return Ok(post_ids
                .iter()
                .map(|id| (*id, PostUserStats::default()))
                .collect());
        }

        let (liked, collected) = tokio::try_join!(
            self.relations.find_active_post_ids(RelationKind::Like, post_ids, user_id),
            self.relations.find_active_post_ids(RelationKind::Collect, post_ids, user_id),
        )?;

        Ok(post_ids
            .iter()
            .map(|id| {
                (
                    *id,
                    PostUserStats {
                        liked: liked.contains(id),
                        collected: collected.contains(id),
                    },
                )
            })
            .collect())
    }
}

/// Conserve l'ordre de première apparition
fn dedupe(post_ids: &[PostId]) -> Vec<PostId> {
    let mut seen = HashSet::with_capacity(post_ids.len());
    post_ids.iter().filter(|id| seen.insert(**id)).copied().collect()
}
