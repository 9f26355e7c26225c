//! # Platform Core - Domain Module
//!
//! Passive entities exchanged with the persistence and delivery boundaries.

pub mod attachment;
pub mod email_message;
pub mod tenant_record;

pub use attachment::Attachment;
pub use email_message::EmailMessage;
pub use tenant_record::TenantRecord;
