use thiserror::Error;

/// Failures raised below the service layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not acquire a database connection: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("statement failed: {0}")]
    Statement(#[from] sqlx::Error),
}
