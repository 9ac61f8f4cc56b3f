use sea_orm::DbErr;
use thiserror::Error;

use crate::db::dao::DaoLayerError;

/// Failures surfaced by todo operations.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{reason}")]
    InvalidIdentifier { id: i32, reason: &'static str },

    #[error("{0}")]
    ValidationFailure(String),

    #[error("todo not found (id={id})")]
    NotFound { id: i32 },

    #[error("persistence failure: {0}")]
    PersistenceFailure(#[source] DbErr),
}

impl From<DaoLayerError> for TodoError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { id, .. } => TodoError::NotFound { id },
            DaoLayerError::Db(err) => TodoError::PersistenceFailure(err),
        }
    }
}
