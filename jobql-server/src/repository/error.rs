//! Repository error type

use thiserror::Error;

/// Errors returned by every repository operation
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The external identifier is not a valid document id
    #[error("invalid job listing id: {0:?}")]
    InvalidIdentifier(String),

    /// No stored listing matches the identifier
    #[error("job listing {0} not found")]
    NotFound(String),

    /// Any other failure reported by the store
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
