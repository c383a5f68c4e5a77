// crates/post-stats/tests/infrastructure/cache_it_for_post_stats.rs

use crate::common::setup_redis_test_cache;
use post_stats::domain::events::StatsField;
use post_stats::domain::repositories::PostStatsCache;
use post_stats::domain::value_objects::{PostStats, ReadViewer};
use post_stats::infrastructure::cache::PostStatsCacheRepository;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::infrastructure::redis::utils::RedisTestContext;
use std::time::Duration;

async fn setup_context() -> (PostStatsCacheRepository, RedisTestContext) {
    let ctx = setup_redis_test_cache().await;
    let cache = PostStatsCacheRepository::new(ctx.repository());
    (cache, ctx)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_event_is_applied_once_and_marks_post_dirty() {
    let (cache, _ctx) = setup_context().await;
    let post = PostId::from_raw(7);
    let ttl = Duration::from_secs(60);

    assert!(cache.apply_event_once("evt-1", post, StatsField::Like, 1, ttl).await.unwrap());
    assert!(!cache.apply_event_once("evt-1", post, StatsField::Like, 1, ttl).await.unwrap());
    assert!(cache.apply_event_once("evt-2", post, StatsField::Read, 1, ttl).await.unwrap());

    let stats = cache.get(post).await.unwrap().expect("post should be cached");
    assert_eq!(stats, PostStats::new(post, 1, 0, 1));

    assert_eq!(cache.pop_dirty(10).await.unwrap(), vec![post]);
    assert!(cache.pop_dirty(10).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_get_many_only_returns_cached_posts() {
    let (cache, _ctx) = setup_context().await;
    let cached = PostStats::new(PostId::from_raw(1), 3, 2, 10);

    cache.set_many_if_absent(&[cached]).await.unwrap();

    let found = cache
        .get_many(&[PostId::from_raw(1), PostId::from_raw(2)])
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[&PostId::from_raw(1)], cached);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_dirty_set_is_drained_by_batches() {
    let (cache, _ctx) = setup_context().await;
    let posts: Vec<PostId> = (1..=5).map(PostId::from_raw).collect();

    cache.mark_dirty(&posts).await.unwrap();

    let mut drained = Vec::new();
    loop {
        let batch = cache.pop_dirty(2).await.unwrap();
        if batch.is_empty() {
            break;
        }
        assert!(batch.len() <= 2);
        drained.extend(batch);
    }

    drained.sort();
    assert_eq!(drained, posts);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_read_claim_and_flush_lock_expire() {
    let (cache, _ctx) = setup_context().await;
    let post = PostId::from_raw(4);
    let viewer = ReadViewer::User(UserId::from_raw(9));
    let ttl = Duration::from_secs(1);

    assert!(cache.claim_read(post, &viewer, ttl).await.unwrap());
    assert!(!cache.claim_read(post, &viewer, ttl).await.unwrap());
    assert!(cache.try_acquire_flush_lock(ttl).await.unwrap());
    assert!(!cache.try_acquire_flush_lock(ttl).await.unwrap());

    tokio::time::sleep(Duration::from_millis(1200)).await;

    assert!(cache.claim_read(post, &viewer, ttl).await.unwrap());
    assert!(cache.try_acquire_flush_lock(ttl).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_backfill_keeps_counters_already_in_cache() {
    let (cache, _ctx) = setup_context().await;
    let post = PostId::from_raw(7);

    cache
        .apply_event_once("evt-1", post, StatsField::Like, 1, Duration::from_secs(60))
        .await
        .unwrap();

    let written = cache
        .set_many_if_absent(&[PostStats::empty(post), PostStats::new(PostId::from_raw(8), 2, 0, 0)])
        .await
        .unwrap();

    assert_eq!(written, 1);
    assert_eq!(cache.get(post).await.unwrap().map(|s| s.like_count()), Some(1));
    assert_eq!(
        cache.get(PostId::from_raw(8)).await.unwrap(),
        Some(PostStats::new(PostId::from_raw(8), 2, 0, 0))
    );
}
