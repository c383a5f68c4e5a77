// crates/post-stats/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::{AppResult, infra_err};

pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(infra_err)?;

    tracing::info!("✅ Post stats migrations applied");
    Ok(())
}
