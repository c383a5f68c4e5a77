// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError, ErrorCode};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Use Cases, Repositories durables (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Cache, Broker, Workers.
/// Il permet de manipuler des erreurs techniques (Redis down) et métier simultanément.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Helper pour les erreurs d'infrastructure (Redis, Kafka) rapides
pub fn infra_err(err: impl std::fmt::Display) -> AppError {
    AppError::new(ErrorCode::InfrastructureFailure, err.to_string())
}
