// crates/post-stats/src/infrastructure/postgres/repositories/postgres_post_stats_repository.rs

use crate::domain::repositories::PostStatsRepository;
use crate::domain::value_objects::PostStats;
use crate::infrastructure::postgres::rows::PostgresPostStatsRow;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;
use std::collections::HashMap;

pub struct PostgresPostStatsRepository {
    pool: PgPool,
}

impl PostgresPostStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStatsRepository for PostgresPostStatsRepository {
    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> Result<Vec<PostStats>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_as::<_, PostgresPostStatsRow>(
            r#"
            SELECT post_id, like_cnt, collect_cnt, read_cnt
            FROM post_stats
            WHERE post_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_domain_infra("PostStatsFetch")?;

        Ok(rows.into_iter().map(PostStats::from).collect())
    }

    async fn upsert(&self, stats: &[PostStats]) -> Result<()> {
        // ON CONFLICT refuse deux fois la même clé dans une instruction : dernier gagnant
        let latest: HashMap<PostId, &PostStats> = stats.iter().map(|s| (s.post_id(), s)).collect();
        if latest.is_empty() {
            return Ok(());
        }

        let mut ids = Vec::with_capacity(latest.len());
        let mut likes = Vec::with_capacity(latest.len());
        let mut collects = Vec::with_capacity(latest.len());
        let mut reads = Vec::with_capacity(latest.len());
        for s in latest.values() {
            ids.push(s.post_id().value());
            likes.push(s.like_count() as i64);
            collects.push(s.collect_count() as i64);
            reads.push(s.read_count() as i64);
        }

        sqlx::query(
            r#"
            INSERT INTO post_stats (post_id, like_cnt, collect_cnt, read_cnt)
            SELECT * FROM UNNEST($1::BIGINT[], $2::BIGINT[], $3::BIGINT[], $4::BIGINT[])
            ON CONFLICT (post_id) DO UPDATE SET
                like_cnt = EXCLUDED.like_cnt,
                collect_cnt = EXCLUDED.collect_cnt,
                read_cnt = EXCLUDED.read_cnt,
                updated_at = NOW()
            "#,
        )
        .bind(&ids)
        .bind(&likes)
        .bind(&collects)
        .bind(&reads)
        .execute(&self.pool)
        .await
        .map_domain_infra("PostStatsUpsert")?;

        Ok(())
    }
}
