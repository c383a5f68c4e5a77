// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

pub trait SqlxErrorExt<T> {
    /// Traduit une erreur SQLx en erreur de domaine pour l'entité nommée.
    fn map_domain(self, entity: &'static str) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain(self, entity: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity,
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => {
                // Violation d'unicité (Code Postgres 23505)
                if db_err.code().map(|c| c == "23505").unwrap_or(false) {
                    let constraint = db_err
                        .try_downcast_ref::<PgDatabaseError>()
                        .and_then(|pg| pg.constraint())
                        .unwrap_or("unknown");

                    return DomainError::AlreadyExists {
                        entity,
                        field: "unique_constraint",
                        value: constraint.to_string(),
                    };
                }

                DomainError::Infrastructure(format!("{}: {}", entity, db_err.message()))
            }
            _ => DomainError::Infrastructure(format!("{}: {}", entity, e)),
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}
