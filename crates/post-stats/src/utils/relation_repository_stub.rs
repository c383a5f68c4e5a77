// crates/post-stats/src/utils/relation_repository_stub.rs

use crate::domain::repositories::RelationRepository;
use crate::domain::value_objects::{RelationKind, RelationStatus};
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{PostId, UserId};
use shared_kernel::errors::{DomainError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct RelationRepositoryStub {
    pub statuses: Mutex<HashMap<(RelationKind, PostId, UserId), RelationStatus>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl RelationRepositoryStub {
    pub fn status(&self, kind: RelationKind, post_id: PostId, user_id: UserId) -> Option<RelationStatus> {
        self.statuses.lock().unwrap().get(&(kind, post_id, user_id)).copied()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RelationRepository for RelationRepositoryStub {
    async fn set_status(
        &self,
        kind: RelationKind,
        post_id: PostId,
        user_id: UserId,
        status: RelationStatus,
    ) -> Result<bool> {
        self.check_error()?;

        let mut statuses = self.statuses.lock().unwrap();
        let key = (kind, post_id, user_id);
        match statuses.get(&key) {
            Some(current) if *current == status => Ok(false),
            // Pas de ligne créée pour une désactivation
            None if !status.is_active() => Ok(false),
            _ => {
                statuses.insert(key, status);
                Ok(true)
            }
        }
    }

    async fn has_active(&self, kind: RelationKind, post_id: PostId, user_id: UserId) -> Result<bool> {
        self.check_error()?;
        Ok(self
            .status(kind, post_id, user_id)
            .is_some_and(|s| s.is_active()))
    }

    async fn find_active_post_ids(
        &self,
        kind: RelationKind,
        post_ids: &[PostId],
        user_id: UserId,
    ) -> Result<HashSet<PostId>> {
        self.check_error()?;

        let statuses = self.statuses.lock().unwrap();
        Ok(post_ids
            .iter()
            .filter(|id| {
                statuses
                    .get(&(kind, **id, user_id))
                    .is_some_and(|s| s.is_active())
            })
            .copied()
            .collect())
    }
}
