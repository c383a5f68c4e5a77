// crates/post-stats/src/application/get_stats/get_stats_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::get_stats::{GetStatsBatchCommand, GetStatsCommand, GetStatsUseCase};
    use crate::domain::events::StatsField;
    use crate::domain::repositories::{PostStatsCache, PostStatsRepository, RelationRepository};
    use crate::domain::value_objects::{PostStats, RelationKind, RelationStatus};
    use crate::infrastructure::cache::PostStatsCacheRepository;
    use crate::utils::{PostStatsRepositoryStub, RelationRepositoryStub};
    use shared_kernel::domain::repositories::CacheRepositoryStub;
    use shared_kernel::domain::value_objects::{PostId, UserId};
    use async_trait::async_trait;
    use shared_kernel::errors::{DomainError, Result};
    use std::sync::Arc;
    use std::time::Duration;

    struct Fixture {
        cache_stub: Arc<CacheRepositoryStub>,
        cache: Arc<PostStatsCacheRepository>,
        store: Arc<PostStatsRepositoryStub>,
        relations: Arc<RelationRepositoryStub>,
        use_case: GetStatsUseCase,
    }

    fn setup(store_rows: Vec<PostStats>) -> Fixture {
        let cache_stub = Arc::new(CacheRepositoryStub::default());
        let cache = Arc::new(PostStatsCacheRepository::new(cache_stub.clone()));
        let store = Arc::new(PostStatsRepositoryStub::with_rows(store_rows));
        let relations = Arc::new(RelationRepositoryStub::default());
        let use_case = GetStatsUseCase::new(cache.clone(), store.clone(), relations.clone());

        Fixture { cache_stub, cache, store, relations, use_case }
    }

    fn p(id: i64) -> PostId {
        PostId::from_raw(id)
    }

    /// Base dont la lecture laisse le consommateur appliquer un like entre le miss cache et le backfill.
    struct StoreRacingConsumer {
        inner: PostStatsRepositoryStub,
        cache: Arc<PostStatsCacheRepository>,
    }

    #[async_trait]
    impl PostStatsRepository for StoreRacingConsumer {
        async fn find_by_post_ids(&self, post_ids: &[PostId]) -> Result<Vec<PostStats>> {
            for id in post_ids {
                self.cache
                    .apply_event_once("concurrent-like", *id, StatsField::Like, 1, Duration::from_secs(60))
                    .await?;
            }
            self.inner.find_by_post_ids(post_ids).await
        }

        async fn upsert(&self, stats: &[PostStats]) -> Result<()> {
            self.inner.upsert(stats).await
        }
    }

    fn setup_racing(store_rows: Vec<PostStats>) -> (Arc<PostStatsCacheRepository>, GetStatsUseCase) {
        let cache = Arc::new(PostStatsCacheRepository::new(Arc::new(CacheRepositoryStub::default())));
        let store = Arc::new(StoreRacingConsumer {
            inner: PostStatsRepositoryStub::with_rows(store_rows),
            cache: cache.clone(),
        });
        let use_case = GetStatsUseCase::new(
            cache.clone(),
            store,
            Arc::new(RelationRepositoryStub::default()),
        );
        (cache, use_case)
    }

    #[tokio::test]
    async fn test_backfill_never_overwrites_a_concurrent_increment() {
        let (cache, use_case) = setup_racing(vec![]);

        let batch = use_case
            .execute_batch(GetStatsBatchCommand { post_ids: vec![p(7)], user_id: UserId::ANONYMOUS })
            .await
            .unwrap();

        // Le like appliqué pendant la lecture survit au backfill, et c'est lui qui est servi
        assert_eq!(cache.get(p(7)).await.unwrap().map(|s| s.like_count()), Some(1));
        assert_eq!(batch.stats_for(p(7)).like_count(), 1);
        assert_eq!(cache.pop_dirty(10).await.unwrap(), vec![p(7)]);
    }

    #[tokio::test]
    async fn test_cache_read_error_does_not_push_stale_store_values() {
        // Cache plus récent que la base, mais illisible le temps d'une requête
        let f = setup(vec![PostStats::new(p(7), 5, 0, 0)]);
        f.cache.set_many_if_absent(&[PostStats::new(p(7), 8, 0, 0)]).await.unwrap();
        f.cache_stub.fail_on("hash_get_many");

        let batch = f
            .use_case
            .execute_batch(GetStatsBatchCommand { post_ids: vec![p(7)], user_id: UserId::ANONYMOUS })
            .await
            .unwrap();
        assert_eq!(batch.stats_for(p(7)).like_count(), 5);

        f.cache_stub.recover("hash_get_many");
        assert_eq!(f.cache.get(p(7)).await.unwrap().map(|s| s.like_count()), Some(8));
    }

    #[tokio::test]
    async fn test_batch_mixes_cache_store_and_zero_defaults() {
        // Arrange : p1 en cache, p2 seulement en base, p3 nulle part
        let f = setup(vec![PostStats::new(p(2), 5, 1, 40)]);
        f.cache.set_many_if_absent(&[PostStats::new(p(1), 9, 0, 100)]).await.unwrap();

        // Act
        let batch = f
            .use_case
            .execute_batch(GetStatsBatchCommand {
                post_ids: vec![p(1), p(2), p(3)],
                user_id: UserId::ANONYMOUS,
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(batch.stats[&p(1)], PostStats::new(p(1), 9, 0, 100));
        assert_eq!(batch.stats[&p(2)], PostStats::new(p(2), 5, 1, 40));
        assert_eq!(batch.stats[&p(3)], PostStats::empty(p(3)));

        // p2 a été réinjecté dans le cache
        assert_eq!(f.cache.get(p(2)).await.unwrap(), Some(PostStats::new(p(2), 5, 1, 40)));
        assert_eq!(batch.user_stats.len(), 3);
        assert!(batch.user_stats.values().all(|u| !u.liked && !u.collected));
    }

    #[tokio::test]
    async fn test_user_flags_come_from_relations() {
        let f = setup(vec![]);
        let user = UserId::from_raw(1);
        f.relations
            .set_status(RelationKind::Like, p(1), user, RelationStatus::Active)
            .await
            .unwrap();
        f.relations
            .set_status(RelationKind::Collect, p(2), user, RelationStatus::Active)
            .await
            .unwrap();

        let batch = f
            .use_case
            .execute_batch(GetStatsBatchCommand {
                post_ids: vec![p(1), p(2)],
                user_id: user,
            })
            .await
            .unwrap();

        assert!(batch.user_stats[&p(1)].liked && !batch.user_stats[&p(1)].collected);
        assert!(!batch.user_stats[&p(2)].liked && batch.user_stats[&p(2)].collected);
    }

    #[tokio::test]
    async fn test_cache_outage_falls_back_to_store() {
        let f = setup(vec![PostStats::new(p(1), 3, 0, 0)]);
        f.cache_stub.fail_on("hash_get_many");
        f.cache_stub.fail_on("hash_set_many_if_absent");

        let (stats, user_stats) = f
            .use_case
            .execute(GetStatsCommand { post_id: p(1), user_id: UserId::ANONYMOUS })
            .await
            .unwrap();

        assert_eq!(stats.like_count(), 3);
        assert!(!user_stats.liked);
    }

    #[tokio::test]
    async fn test_store_outage_degrades_to_zero_without_backfill() {
        let f = setup(vec![]);
        *f.store.find_error.lock().unwrap() = Some(DomainError::Infrastructure("db down".into()));

        let (stats, _) = f
            .use_case
            .execute(GetStatsCommand { post_id: p(4), user_id: UserId::ANONYMOUS })
            .await
            .unwrap();

        assert!(stats.is_empty());
        // Aucun zéro ne doit masquer la valeur réelle au prochain appel
        assert_eq!(f.cache.get(p(4)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_relation_lookup_error_is_propagated() {
        let f = setup(vec![]);
        *f.relations.error_to_return.lock().unwrap() =
            Some(DomainError::Infrastructure("db down".into()));

        let result = f
            .use_case
            .execute(GetStatsCommand { post_id: p(1), user_id: UserId::from_raw(9) })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_batch_and_duplicate_ids() {
        let f = setup(vec![]);

        let empty = f
            .use_case
            .execute_batch(GetStatsBatchCommand { post_ids: vec![], user_id: UserId::ANONYMOUS })
            .await
            .unwrap();
        assert!(empty.stats.is_empty() && empty.user_stats.is_empty());

        let batch = f
            .use_case
            .execute_batch(GetStatsBatchCommand {
                post_ids: vec![p(8), p(8)],
                user_id: UserId::ANONYMOUS,
            })
            .await
            .unwrap();
        assert_eq!(batch.stats.len(), 1);
    }
}
