use shared_types::ClaimId;
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Data layer error: {0}")]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Claim `{0}` not found")]
    Claim(ClaimId),
}

/// Data-integrity violations caught before anything reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Document list must contain at least one entry")]
    EmptyDocuments,

    #[error("Field `{field}` must not be blank")]
    BlankField { field: &'static str },

    #[error("Field `{field}` must be at least {min} characters long")]
    FieldTooShort { field: &'static str, min: usize },
}
