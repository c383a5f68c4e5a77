// crates/post-stats/tests/scenarios/interaction_flow_it.rs

use crate::common::InMemoryPipeline;
use post_stats::domain::value_objects::{PostStats, RelationKind, RelationStatus};
use post_stats::infrastructure::cache::CacheKeys;
use shared_kernel::domain::value_objects::{PostId, UserId};
use std::time::Duration;

fn post(id: i64) -> PostId {
    PostId::from_raw(id)
}

fn user(id: i64) -> UserId {
    UserId::from_raw(id)
}

#[tokio::test]
async fn test_like_unlike_collect_reaches_the_store() {
    let mut pipeline = InMemoryPipeline::start();

    pipeline.service.like(post(7), user(42)).await.unwrap();
    pipeline.service.unlike(post(7), user(42)).await.unwrap();
    pipeline.service.collect(post(7), user(42)).await.unwrap();

    pipeline.wait_acked(3).await;
    pipeline.wait_flushed(PostStats::new(post(7), 0, 1, 0)).await;

    let (stats, flags) = pipeline.service.get_stats(post(7), user(42)).await.unwrap();
    assert_eq!(stats, PostStats::new(post(7), 0, 1, 0));
    assert!(!flags.liked);
    assert!(flags.collected);

    assert_eq!(
        pipeline.relations.status(RelationKind::Collect, post(7), user(42)),
        Some(RelationStatus::Active)
    );

    pipeline.stop().await.unwrap();
}

#[tokio::test]
async fn test_repeated_like_counts_once() {
    let mut pipeline = InMemoryPipeline::start();

    pipeline.service.like(post(3), user(1)).await.unwrap();
    pipeline.service.like(post(3), user(1)).await.unwrap();
    pipeline.service.like(post(3), user(2)).await.unwrap();

    // Le second like de l'utilisateur 1 est un no-op : aucun événement
    assert_eq!(pipeline.bus.published(), 2);

    pipeline.wait_acked(2).await;
    pipeline.wait_flushed(PostStats::new(post(3), 2, 0, 0)).await;

    pipeline.stop().await.unwrap();
}

#[tokio::test]
async fn test_reads_are_deduplicated_per_viewer() {
    let mut pipeline = InMemoryPipeline::start();

    pipeline.service.read(post(9), UserId::ANONYMOUS, "10.0.0.1", "curl/8").await.unwrap();
    pipeline.service.read(post(9), UserId::ANONYMOUS, "10.0.0.1", "curl/8").await.unwrap();
    pipeline.service.read(post(9), UserId::ANONYMOUS, "10.0.0.2", "curl/8").await.unwrap();
    pipeline.service.read(post(9), user(5), "10.0.0.1", "curl/8").await.unwrap();

    assert_eq!(pipeline.bus.published(), 3);

    pipeline.wait_acked(3).await;
    pipeline.wait_flushed(PostStats::new(post(9), 0, 0, 3)).await;

    pipeline.stop().await.unwrap();
}

#[tokio::test]
async fn test_transient_cache_failure_is_redelivered() {
    let mut pipeline = InMemoryPipeline::start();
    pipeline.cache_backend.fail_on("incr_once");

    pipeline.service.like(post(11), user(1)).await.unwrap();

    tokio::time::timeout(Duration::from_secs(5), async {
        while pipeline.bus.requeued() == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("message never requeued");
    pipeline.cache_backend.recover("incr_once");

    pipeline.wait_acked(1).await;
    pipeline.wait_flushed(PostStats::new(post(11), 1, 0, 0)).await;

    pipeline.stop().await.unwrap();
}

#[tokio::test]
async fn test_batch_view_mixes_cache_and_store() {
    let mut pipeline = InMemoryPipeline::start();

    // Post 20 : uniquement en base (cache froid)
    pipeline
        .store
        .rows
        .lock()
        .unwrap()
        .insert(post(20), PostStats::new(post(20), 4, 2, 9));

    pipeline.service.like(post(21), user(8)).await.unwrap();
    pipeline.wait_acked(1).await;

    let batch = pipeline
        .service
        .get_stats_batch(&[post(20), post(21), post(22), post(20)], user(8))
        .await
        .unwrap();

    assert_eq!(batch.stats.len(), 3);
    assert_eq!(batch.stats_for(post(20)), PostStats::new(post(20), 4, 2, 9));
    assert_eq!(batch.stats_for(post(21)).like_count(), 1);
    assert!(batch.stats_for(post(22)).is_empty());
    assert!(batch.user_stats_for(post(21)).liked);
    assert!(!batch.user_stats_for(post(20)).liked);

    // Backfill : le post 20 est désormais servi par le cache
    assert!(pipeline.cache_backend.hash(&CacheKeys::stats(post(20))).is_some());

    pipeline.stop().await.unwrap();
}

#[tokio::test]
async fn test_anonymous_like_is_rejected() {
    let mut pipeline = InMemoryPipeline::start();

    let result = pipeline.service.like(post(1), UserId::ANONYMOUS).await;

    assert!(result.is_err());
    assert_eq!(pipeline.bus.published(), 0);

    pipeline.stop().await.unwrap();
}
