// crates/post-stats/src/infrastructure/postgres/rows/postgres_post_stats_row.rs

use crate::domain::value_objects::PostStats;
use shared_kernel::domain::value_objects::PostId;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct PostgresPostStatsRow {
    pub post_id: i64,
    pub like_cnt: i64,
    pub collect_cnt: i64,
    pub read_cnt: i64,
}

impl From<PostgresPostStatsRow> for PostStats {
    fn from(row: PostgresPostStatsRow) -> Self {
        PostStats::from_signed(
            PostId::from_raw(row.post_id),
            row.like_cnt,
            row.collect_cnt,
            row.read_cnt,
        )
    }
}
