// crates/post-stats/tests/infrastructure/repository_it_for_relations.rs

use crate::common::setup_postgres_test_db;
use post_stats::domain::repositories::RelationRepository;
use post_stats::domain::value_objects::{RelationKind, RelationStatus};
use post_stats::infrastructure::postgres::repositories::PostgresRelationRepository;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

async fn setup_context() -> (PostgresRelationRepository, PostgresTestContext) {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresRelationRepository::new(ctx.pool());
    (repo, ctx)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_set_status_reports_only_real_transitions() {
    let (repo, _ctx) = setup_context().await;
    let post = PostId::from_raw(7);
    let user = UserId::from_raw(42);
    let like = RelationKind::Like;

    assert!(repo.set_status(like, post, user, RelationStatus::Active).await.unwrap());
    assert!(!repo.set_status(like, post, user, RelationStatus::Active).await.unwrap());
    assert!(repo.has_active(like, post, user).await.unwrap());

    assert!(repo.set_status(like, post, user, RelationStatus::Inactive).await.unwrap());
    assert!(!repo.set_status(like, post, user, RelationStatus::Inactive).await.unwrap());
    assert!(!repo.has_active(like, post, user).await.unwrap());

    assert!(repo.set_status(like, post, user, RelationStatus::Active).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_deactivating_unknown_relation_creates_nothing() {
    let (repo, ctx) = setup_context().await;
    let post = PostId::from_raw(3);
    let user = UserId::from_raw(5);

    let changed = repo
        .set_status(RelationKind::Collect, post, user, RelationStatus::Inactive)
        .await
        .unwrap();
    assert!(!changed);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_collect_relations")
        .fetch_one(&ctx.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_like_and_collect_are_independent() {
    let (repo, _ctx) = setup_context().await;
    let user = UserId::from_raw(1);
    let posts: Vec<PostId> = (1..=4).map(PostId::from_raw).collect();

    repo.set_status(RelationKind::Like, posts[0], user, RelationStatus::Active).await.unwrap();
    repo.set_status(RelationKind::Like, posts[2], user, RelationStatus::Active).await.unwrap();
    repo.set_status(RelationKind::Collect, posts[1], user, RelationStatus::Active).await.unwrap();

    let liked = repo.find_active_post_ids(RelationKind::Like, &posts, user).await.unwrap();
    let collected = repo.find_active_post_ids(RelationKind::Collect, &posts, user).await.unwrap();

    assert_eq!(liked.len(), 2);
    assert!(liked.contains(&posts[0]) && liked.contains(&posts[2]));
    assert_eq!(collected.len(), 1);
    assert!(collected.contains(&posts[1]));
    assert!(!repo.has_active(RelationKind::Collect, posts[0], user).await.unwrap());
}
