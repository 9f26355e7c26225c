//! Tenant repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::TenantRecord;
use crate::error::DomainError;

/// Persistence boundary for tenant records. Uniqueness of
/// `tenant_numeric_id` is enforced by the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<TenantRecord>, DomainError>;
    async fn find_by_numeric_id(&self, tenant_numeric_id: i64) -> Result<Option<TenantRecord>, DomainError>;
    async fn create(&self, tenant: &TenantRecord) -> Result<TenantRecord, DomainError>;
    async fn update(&self, tenant: &TenantRecord) -> Result<TenantRecord, DomainError>;
}
