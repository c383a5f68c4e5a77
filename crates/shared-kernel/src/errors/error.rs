// crates/shared-kernel/src/errors/error.rs

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Erreur liée à l'infrastructure (DB, Kafka, Redis)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into(),
            },
            ErrorCode::InfrastructureFailure | ErrorCode::ServiceUnavailable => {
                DomainError::Infrastructure(err.message)
            }
            _ => DomainError::Internal(err.message),
        }
    }
}
