// crates/shared-kernel/src/domain/value_objects/post_id.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Validation et création depuis une entrée externe (API, payload broker).
    pub fn try_new(id: i64) -> Result<Self> {
        let post_id = Self(id);
        post_id.validate()?;
        Ok(post_id)
    }

    /// Reconstruction depuis un type sûr (Interne/DB/Redis)
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for PostId {
    fn validate(&self) -> Result<()> {
        if self.0 <= 0 {
            return Err(DomainError::Validation {
                field: "post_id",
                reason: format!("Post ID must be positive, got {}", self.0),
            });
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl FromStr for PostId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let raw = s.parse::<i64>().map_err(|_| DomainError::Validation {
            field: "post_id",
            reason: format!("'{}' is not a valid post id", s),
        })?;
        Self::try_new(raw)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
