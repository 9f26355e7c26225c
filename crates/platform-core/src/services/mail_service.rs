// ============================================================================
// Platform Core - Mail Service
// File: crates/platform-core/src/services/mail_service.rs
// ============================================================================
//! Hands email messages to the delivery integration

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use validator::Validate;

use platform_shared::utils::mask_email;

use crate::delivery::EmailDelivery;
use crate::domain::EmailMessage;
use crate::error::DomainError;

pub struct MailService<D: EmailDelivery> {
    delivery: Arc<D>,
}

impl<D: EmailDelivery> MailService<D> {
    pub fn new(delivery: Arc<D>) -> Self {
        Self { delivery }
    }

    /// Send one message. A malformed recipient never reaches the delivery port.
    pub async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        let recipient = mask_email(&message.to_email);

        if message.validate().is_err() {
            warn!("Rejected email with invalid recipient: {}", recipient);
            return Err(DomainError::InvalidRecipient(message.to_email));
        }

        debug!(
            placeholders = message.placeholders.len(),
            attachments = message.attachments.len(),
            has_html = message.html_content.is_some(),
            "Dispatching email to {}",
            recipient
        );

        self.delivery.send(message).await.map_err(|e| {
            error!("Email delivery to {} failed: {}", recipient, e);
            e
        })?;

        info!("Email sent to {}", recipient);
        Ok(())
    }
}
