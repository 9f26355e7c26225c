// ============================================================================
// Platform Core - Email Message DTO
// File: crates/platform-core/src/domain/email_message.rs
// Description: Templated email payload for the delivery integration
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Attachment;

/// Outbound templated email.
///
/// Built per send request and moved into the delivery boundary. Template
/// rendering and address checks happen on the other side of that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailMessage {
    pub subject: String,

    /// Template token -> substitution text.
    #[serde(default)]
    pub placeholders: HashMap<String, String>,

    /// Template token -> attachment referenced at that token.
    #[serde(default)]
    pub attachments: HashMap<String, Attachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,

    pub email: String,

    #[validate(email(message = "Recipient must be a valid email address"))]
    pub to_email: String,
}

impl EmailMessage {
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        to_email: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            placeholders: HashMap::new(),
            attachments: HashMap::new(),
            html_content: None,
            email: email.into(),
            to_email: to_email.into(),
        }
    }

    /// Set the substitution for `token`, replacing any previous value.
    pub fn with_placeholder(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholders.insert(token.into(), value.into());
        self
    }

    pub fn with_attachment(mut self, token: impl Into<String>, attachment: Attachment) -> Self {
        self.attachments.insert(token.into(), attachment);
        self
    }

    pub fn with_html_content(mut self, html: impl Into<String>) -> Self {
        self.html_content = Some(html.into());
        self
    }

    pub fn placeholder(&self, token: &str) -> Option<&str> {
        self.placeholders.get(token).map(String::as_str)
    }

    pub fn attachment(&self, token: &str) -> Option<&Attachment> {
        self.attachments.get(token)
    }
}
