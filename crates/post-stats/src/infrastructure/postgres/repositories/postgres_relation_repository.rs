// crates/post-stats/src/infrastructure/postgres/repositories/postgres_relation_repository.rs

use crate::domain::repositories::RelationRepository;
use crate::domain::value_objects::{RelationKind, RelationStatus};
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;
use std::collections::HashSet;

/// Une table par type de relation, même schéma.
pub struct PostgresRelationRepository {
    pool: PgPool,
}

impl PostgresRelationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn table(kind: RelationKind) -> &'static str {
        match kind {
            RelationKind::Like => "post_like_relations",
            RelationKind::Collect => "post_collect_relations",
        }
    }
}

#[async_trait]
impl RelationRepository for PostgresRelationRepository {
    async fn set_status(
        &self,
        kind: RelationKind,
        post_id: PostId,
        user_id: UserId,
        status: RelationStatus,
    ) -> Result<bool> {
        let table = Self::table(kind);

        match status {
            // Upsert conditionnel : RETURNING ne renvoie une ligne que si le statut change
            RelationStatus::Active => {
                let sql = format!(
                    r#"
                    INSERT INTO {table} (post_id, user_id, status)
                    VALUES ($1, $2, 1)
                    ON CONFLICT (post_id, user_id) DO UPDATE SET
                        status = EXCLUDED.status,
                        updated_at = NOW()
                    WHERE {table}.status <> EXCLUDED.status
                    RETURNING id
                    "#
                );

                let changed = sqlx::query_scalar::<_, i64>(&sql)
                    .bind(post_id.value())
                    .bind(user_id.value())
                    .fetch_optional(&self.pool)
                    .await
                    .map_domain_infra("RelationActivate")?;

                Ok(changed.is_some())
            }
            // Jamais de ligne créée pour une désactivation
            RelationStatus::Inactive => {
                let sql = format!(
                    r#"
                    UPDATE {table}
                    SET status = 0, updated_at = NOW()
                    WHERE post_id = $1 AND user_id = $2 AND status = 1
                    "#
                );

                let result = sqlx::query(&sql)
                    .bind(post_id.value())
                    .bind(user_id.value())
                    .execute(&self.pool)
                    .await
                    .map_domain_infra("RelationDeactivate")?;

                Ok(result.rows_affected() > 0)
            }
        }
    }

    async fn has_active(&self, kind: RelationKind, post_id: PostId, user_id: UserId) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE post_id = $1 AND user_id = $2 AND status = 1)",
            Self::table(kind)
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(post_id.value())
            .bind(user_id.value())
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("RelationExists")
    }

    async fn find_active_post_ids(
        &self,
        kind: RelationKind,
        post_ids: &[PostId],
        user_id: UserId,
    ) -> Result<HashSet<PostId>> {
        if post_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let sql = format!(
            "SELECT post_id FROM {} WHERE user_id = $1 AND post_id = ANY($2) AND status = 1",
            Self::table(kind)
        );
        let ids: Vec<i64> = post_ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id.value())
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("RelationFindActive")?;

        Ok(rows.into_iter().map(PostId::from_raw).collect())
    }
}
