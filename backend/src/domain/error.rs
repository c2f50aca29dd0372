use thiserror::Error;

use super::validators::ValidationError;
use crate::storage::StorageError;

/// Failures surfaced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An id lookup found no row
    #[error("{0}")]
    NotFound(String),

    /// A validator rejected the input or there is not enough stock
    #[error("{0}")]
    InvalidArgument(String),

    /// Only reported where the service asks the store for diagnostics
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StorageError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
