//! # Platform Core
//!
//! Tenant and email-message entities, the ports external collaborators
//! implement, and the services that drive them.

pub mod domain;
pub mod delivery;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
