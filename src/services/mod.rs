pub mod api;
pub mod booking;
pub mod listing;
pub mod main;
pub mod review;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
