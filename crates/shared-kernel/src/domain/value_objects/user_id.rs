// crates/shared-kernel/src/domain/value_objects/user_id.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant utilisateur. La valeur 0 représente un visiteur non authentifié.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub const ANONYMOUS: UserId = UserId(0);

    pub fn try_new(id: i64) -> Result<Self> {
        let user_id = Self(id);
        user_id.validate()?;
        Ok(user_id)
    }

    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_authenticated(&self) -> bool {
        self.0 > 0
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0 < 0 {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: format!("User ID cannot be negative, got {}", self.0),
            });
        }
        Ok(())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::ANONYMOUS
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
