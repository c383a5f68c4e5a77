// crates/post-stats/src/domain/value_objects/relation.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Like,
    Collect,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Collect => "collect",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statut persistant d'une relation (colonne `status` : 0 ou 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationStatus {
    Inactive,
    Active,
}

impl RelationStatus {
    pub fn as_i16(&self) -> i16 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    pub fn try_from_i16(raw: i16) -> Result<Self> {
        match raw {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            other => Err(DomainError::Validation {
                field: "status",
                reason: format!("Relation status must be 0 or 1, got {}", other),
            }),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
