// crates/post-stats/tests/infrastructure/repository_it_for_post_stats.rs

use crate::common::setup_postgres_test_db;
use post_stats::domain::repositories::PostStatsRepository;
use post_stats::domain::value_objects::PostStats;
use post_stats::infrastructure::postgres::repositories::PostgresPostStatsRepository;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

async fn setup_context() -> (PostgresPostStatsRepository, PostgresTestContext) {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresPostStatsRepository::new(ctx.pool());
    (repo, ctx)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_upsert_inserts_then_overwrites() {
    let (repo, _ctx) = setup_context().await;
    let post = PostId::from_raw(7);

    repo.upsert(&[PostStats::new(post, 1, 0, 5)]).await.unwrap();
    repo.upsert(&[PostStats::new(post, 0, 1, 6)]).await.unwrap();

    let rows = repo.find_by_post_ids(&[post]).await.unwrap();
    assert_eq!(rows, vec![PostStats::new(post, 0, 1, 6)]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_upsert_batch_with_duplicates_keeps_last_value() {
    let (repo, _ctx) = setup_context().await;
    let a = PostId::from_raw(1);
    let b = PostId::from_raw(2);

    repo.upsert(&[
        PostStats::new(a, 1, 1, 1),
        PostStats::new(b, 2, 2, 2),
        PostStats::new(a, 3, 3, 3),
    ])
    .await
    .unwrap();

    let mut rows = repo.find_by_post_ids(&[a, b]).await.unwrap();
    rows.sort_by_key(|s| s.post_id());
    assert_eq!(rows, vec![PostStats::new(a, 3, 3, 3), PostStats::new(b, 2, 2, 2)]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_missing_posts_are_absent_and_empty_inputs_are_noops() {
    let (repo, _ctx) = setup_context().await;

    repo.upsert(&[]).await.unwrap();

    assert!(repo.find_by_post_ids(&[]).await.unwrap().is_empty());
    assert!(repo.find_by_post_ids(&[PostId::from_raw(404)]).await.unwrap().is_empty());
}
