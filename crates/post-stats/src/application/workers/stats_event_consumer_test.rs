// crates/post-stats/src/application/workers/stats_event_consumer_test.rs

#[cfg(test)]
mod tests {
    use crate::application::workers::StatsEventConsumer;
    use crate::domain::events::{StatsEvent, StatsEventType};
    use crate::domain::repositories::PostStatsCache;
    use crate::infrastructure::cache::{CacheKeys, PostStatsCacheRepository};
    use shared_kernel::application::ports::Acknowledgement;
    use shared_kernel::domain::repositories::CacheRepositoryStub;
    use shared_kernel::domain::value_objects::{PostId, UserId};
    use std::sync::Arc;

    fn setup() -> (Arc<CacheRepositoryStub>, Arc<PostStatsCacheRepository>, Arc<StatsEventConsumer>) {
        let stub = Arc::new(CacheRepositoryStub::default());
        let cache = Arc::new(PostStatsCacheRepository::new(stub.clone()));
        let consumer = Arc::new(StatsEventConsumer::new(cache.clone()));
        (stub, cache, consumer)
    }

    fn event(event_id: &str, event_type: StatsEventType, post_id: i64) -> Vec<u8> {
        StatsEvent {
            event_id: event_id.to_string(),
            event_type,
            post_id: PostId::from_raw(post_id),
            user_id: UserId::from_raw(1),
            ts: 0,
        }
        .to_bytes()
        .unwrap()
    }

    #[tokio::test]
    async fn test_replayed_event_is_applied_once() {
        let (stub, cache, consumer) = setup();
        let payload = event("e-1", StatsEventType::Like, 7);

        for _ in 0..5 {
            assert_eq!(consumer.handle(&payload).await, Acknowledgement::Ack);
        }

        let stats = cache.get(PostId::from_raw(7)).await.unwrap().unwrap();
        assert_eq!(stats.like_count(), 1);
        assert!(stub.set_members(CacheKeys::DIRTY_SET).contains("7"));
    }

    #[tokio::test]
    async fn test_each_event_type_moves_its_counter() {
        let (_, cache, consumer) = setup();

        for (id, kind) in [
            ("a", StatsEventType::Like),
            ("b", StatsEventType::Collect),
            ("c", StatsEventType::Read),
            ("d", StatsEventType::Read),
            ("e", StatsEventType::Uncollect),
        ] {
            consumer.handle(&event(id, kind, 3)).await;
        }

        let stats = cache.get(PostId::from_raw(3)).await.unwrap().unwrap();
        assert_eq!((stats.like_count(), stats.collect_count(), stats.read_count()), (1, 0, 2));
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_payloads_are_acked_and_dropped() {
        let (stub, _, consumer) = setup();

        assert_eq!(consumer.handle(b"{ not json").await, Acknowledgement::Ack);
        let unknown = br#"{"event_id":"x","type":"share","post_id":1,"user_id":1,"ts":0}"#;
        assert_eq!(consumer.handle(unknown).await, Acknowledgement::Ack);

        assert!(stub.set_members(CacheKeys::DIRTY_SET).is_empty());
    }

    #[tokio::test]
    async fn test_cache_failure_requeues_without_consuming_the_event() {
        let (stub, cache, consumer) = setup();
        let payload = event("e-9", StatsEventType::Read, 4);

        stub.fail_on("incr_once");
        assert_eq!(consumer.handle(&payload).await, Acknowledgement::Requeue);

        // Redélivrance après rétablissement : l'événement n'a pas été marqué traité
        stub.recover("incr_once");
        assert_eq!(consumer.handle(&payload).await, Acknowledgement::Ack);

        let stats = cache.get(PostId::from_raw(4)).await.unwrap().unwrap();
        assert_eq!(stats.read_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_likes_on_one_post_are_not_lost() {
        let (_, cache, consumer) = setup();

        let handles: Vec<_> = (0..1000)
            .map(|i| {
                let consumer = Arc::clone(&consumer);
                tokio::spawn(async move {
                    consumer
                        .handle(&event(&format!("like-{i}"), StatsEventType::Like, 1))
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Acknowledgement::Ack);
        }

        let stats = cache.get(PostId::from_raw(1)).await.unwrap().unwrap();
        assert_eq!(stats.like_count(), 1000);
    }
}
