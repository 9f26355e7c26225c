//! Domain services

pub mod mail_service;
pub mod tenant_service;

pub use mail_service::MailService;
pub use tenant_service::TenantService;
