//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Tenant numeric id already exists: {0}")]
    TenantNumericIdAlreadyExists(i64),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Placeholder mismatch: {0}")]
    PlaceholderMismatch(String),

    #[error("Attachment encoding error: {0}")]
    AttachmentEncoding(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
