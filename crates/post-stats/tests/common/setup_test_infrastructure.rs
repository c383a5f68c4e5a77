// crates/post-stats/tests/common/setup_test_infrastructure.rs

use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use shared_kernel::infrastructure::redis::utils::RedisTestContext;

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
}

pub async fn setup_redis_test_cache() -> RedisTestContext {
    RedisTestContext::builder().with_max_clients(4).build().await
}
