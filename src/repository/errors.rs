//! Failures surfaced by [`crate::repository::DieselRepository`].

use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// SQLite rejected a write, e.g. a customer pointing at an unknown company.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be turned into a domain value.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

fn constraint_name(kind: &DatabaseErrorKind) -> Option<&'static str> {
    match kind {
        DatabaseErrorKind::ForeignKeyViolation => Some("foreign key"),
        DatabaseErrorKind::UniqueViolation => Some("unique"),
        DatabaseErrorKind::NotNullViolation => Some("not null"),
        DatabaseErrorKind::CheckViolation => Some("check"),
        _ => None,
    }
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => match constraint_name(&kind) {
                Some(name) => {
                    RepositoryError::ConstraintViolation(format!("{name}: {}", info.message()))
                }
                None => RepositoryError::DatabaseError(info.message().to_string()),
            },
            DieselError::DeserializationError(e) => RepositoryError::InvalidRow(e.to_string()),
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::InvalidRow(err.to_string())
    }
}
