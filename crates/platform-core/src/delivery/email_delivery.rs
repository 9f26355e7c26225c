//! Email delivery trait (port)

use async_trait::async_trait;
use crate::domain::EmailMessage;
use crate::error::DomainError;

/// Boundary to the third-party email service.
///
/// Implementations own template rendering, attachment encoding and delivery
/// status. The message is consumed by the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError>;
}
