// crates/post-stats/src/utils/post_stats_repository_stub.rs

use crate::domain::repositories::PostStatsRepository;
use crate::domain::value_objects::PostStats;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::PostId;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct PostStatsRepositoryStub {
    pub rows: Mutex<HashMap<PostId, PostStats>>,
    pub find_error: Mutex<Option<DomainError>>,
    pub upsert_error: Mutex<Option<DomainError>>,
    /// Historique des lots écrits (un élément par appel à `upsert`)
    pub upserts: Mutex<Vec<Vec<PostStats>>>,
}

impl PostStatsRepositoryStub {
    pub fn with_rows(rows: impl IntoIterator<Item = PostStats>) -> Self {
        let stub = Self::default();
        stub.rows
            .lock()
            .unwrap()
            .extend(rows.into_iter().map(|s| (s.post_id(), s)));
        stub
    }

    pub fn row(&self, post_id: PostId) -> Option<PostStats> {
        self.rows.lock().unwrap().get(&post_id).copied()
    }
}

#[async_trait]
impl PostStatsRepository for PostStatsRepositoryStub {
    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> Result<Vec<PostStats>> {
        if let Some(err) = self.find_error.lock().unwrap().clone() {
            return Err(err);
        }

        let rows = self.rows.lock().unwrap();
        Ok(post_ids.iter().filter_map(|id| rows.get(id).copied()).collect())
    }

    async fn upsert(&self, stats: &[PostStats]) -> Result<()> {
        if let Some(err) = self.upsert_error.lock().unwrap().clone() {
            return Err(err);
        }

        let mut rows = self.rows.lock().unwrap();
        for s in stats {
            rows.insert(s.post_id(), *s);
        }
        self.upserts.lock().unwrap().push(stats.to_vec());
        Ok(())
    }
}
