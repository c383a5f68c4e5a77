// crates/post-stats/src/domain/events/stats_event.rs

use crate::domain::value_objects::{RelationKind, RelationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{PostId, UserId, ValueObject};
use shared_kernel::errors::{DomainError, Result};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsEventType {
    Like,
    Unlike,
    Collect,
    Uncollect,
    Read,
    /// Type émis par une version plus récente du producteur
    #[serde(other)]
    Unknown,
}

/// Compteur ciblé par un événement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsField {
    Like,
    Collect,
    Read,
}

impl StatsEventType {
    /// Type émis par une transition de relation effective
    pub fn for_transition(kind: RelationKind, status: RelationStatus) -> Self {
        match (kind, status) {
            (RelationKind::Like, RelationStatus::Active) => Self::Like,
            (RelationKind::Like, RelationStatus::Inactive) => Self::Unlike,
            (RelationKind::Collect, RelationStatus::Active) => Self::Collect,
            (RelationKind::Collect, RelationStatus::Inactive) => Self::Uncollect,
        }
    }

    /// Delta à appliquer, `None` pour un type inconnu.
    pub fn counter_delta(&self) -> Option<(StatsField, i64)> {
        match self {
            Self::Like => Some((StatsField::Like, 1)),
            Self::Unlike => Some((StatsField::Like, -1)),
            Self::Collect => Some((StatsField::Collect, 1)),
            Self::Uncollect => Some((StatsField::Collect, -1)),
            Self::Read => Some((StatsField::Read, 1)),
            Self::Unknown => None,
        }
    }
}

/// Événement immuable publié à chaque transition acceptée.
/// Format filaire : `{"event_id","type","post_id","user_id","ts"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEvent {
    pub event_id: String,
    #[serde(rename = "type")]
    pub event_type: StatsEventType,
    pub post_id: PostId,
    pub user_id: UserId,
    /// Horodatage Unix (secondes)
    pub ts: i64,
}

impl StatsEvent {
    pub fn new(
        event_type: StatsEventType,
        post_id: PostId,
        user_id: UserId,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7().to_string(),
            event_type,
            post_id,
            user_id,
            ts: occurred_at.timestamp(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Décodage + validation : un payload rejeté ici ne deviendra jamais valide.
    pub fn from_bytes(payload: &[u8]) -> Result<Self> {
        let event: Self = serde_json::from_slice(payload).map_err(|e| DomainError::Validation {
            field: "payload",
            reason: e.to_string(),
        })?;
        event.validate()?;
        Ok(event)
    }

    fn validate(&self) -> Result<()> {
        if self.event_id.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "event_id",
                reason: "Event ID cannot be empty".into(),
            });
        }
        self.post_id.validate()?;
        self.user_id.validate()
    }
}
