// ============================================================================
// Platform Core - Tenant Service
// File: crates/platform-core/src/services/tenant_service.rs
// ============================================================================
//! Tenant provisioning and administration over the repository port

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::TenantRecord;
use crate::error::DomainError;
use crate::repositories::TenantRepository;

pub struct TenantService<R: TenantRepository> {
    tenant_repo: Arc<R>,
}

impl<R: TenantRepository> TenantService<R> {
    pub fn new(tenant_repo: Arc<R>) -> Self {
        Self { tenant_repo }
    }

    /// Provision a new tenant
    pub async fn provision(
        &self,
        tenant_numeric_id: i64,
        tenant_name: &str,
        created_by: Option<Uuid>,
    ) -> Result<TenantRecord, DomainError> {
        info!("Provisioning tenant {}: {}", tenant_numeric_id, tenant_name);

        let tenant = TenantRecord::new(tenant_numeric_id, tenant_name.to_string(), created_by)?;

        if self.tenant_repo.find_by_numeric_id(tenant_numeric_id).await?.is_some() {
            warn!("Provisioning failed: numeric id already exists: {}", tenant_numeric_id);
            return Err(DomainError::TenantNumericIdAlreadyExists(tenant_numeric_id));
        }

        let created = self.tenant_repo.create(&tenant).await?;

        info!("Tenant provisioned: {}", created.id());
        Ok(created)
    }

    /// Rename an existing tenant
    pub async fn rename(
        &self,
        id: &Uuid,
        tenant_name: &str,
        modified_by: Uuid,
    ) -> Result<TenantRecord, DomainError> {
        let mut tenant = self.get(id).await?;

        tenant.rename(tenant_name.to_string(), modified_by)?;
        let updated = self.tenant_repo.update(&tenant).await?;

        info!("Tenant {} renamed to: {}", id, updated.tenant_name());
        Ok(updated)
    }

    pub async fn get(&self, id: &Uuid) -> Result<TenantRecord, DomainError> {
        self.tenant_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Tenant not found: {}", id);
            DomainError::TenantNotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use mockall::predicate::eq;
    use platform_shared::types::Auditable;

    use crate::repositories::MockTenantRepository;

    #[tokio::test]
    async fn test_provision_then_reload() {
        let stored: Arc<Mutex<Option<TenantRecord>>> = Arc::new(Mutex::new(None));

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_numeric_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(None));
        let sink = stored.clone();
        repo.expect_create().times(1).returning(move |tenant| {
            *sink.lock().unwrap() = Some(tenant.clone());
            Ok(tenant.clone())
        });
        let source = stored.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(source.lock().unwrap().clone()));

        let service = TenantService::new(Arc::new(repo));
        let created = service.provision(42, "Acme", None).await.unwrap();
        let reloaded = service.get(&created.id()).await.unwrap();

        assert_eq!(reloaded.id(), created.id());
        assert_eq!(reloaded.tenant_numeric_id(), 42);
        assert_eq!(reloaded.tenant_name(), "Acme");
    }

    #[tokio::test]
    async fn test_provision_rejects_duplicate_numeric_id() {
        let existing = TenantRecord::new(42, "Acme".to_string(), None).unwrap();

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_numeric_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().times(0);

        let service = TenantService::new(Arc::new(repo));
        let result = service.provision(42, "Other", None).await;

        assert!(matches!(result, Err(DomainError::TenantNumericIdAlreadyExists(42))));
    }

    #[tokio::test]
    async fn test_provision_rejects_invalid_name() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_numeric_id().times(0);
        repo.expect_create().times(0);

        let service = TenantService::new(Arc::new(repo));
        let result = service.provision(7, "", None).await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_rename_updates_record() {
        let tenant = TenantRecord::new(42, "Acme".to_string(), None).unwrap();
        let id = tenant.id();
        let admin = Uuid::new_v4();

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(tenant.clone())));
        repo.expect_update()
            .withf(|t| t.tenant_name() == "Acme Corp")
            .times(1)
            .returning(|t| Ok(t.clone()));

        let service = TenantService::new(Arc::new(repo));
        let updated = service.rename(&id, "Acme Corp", admin).await.unwrap();

        assert_eq!(updated.id(), id);
        assert_eq!(updated.tenant_name(), "Acme Corp");
        assert_eq!(updated.audit().modified_by, Some(admin));
    }

    #[tokio::test]
    async fn test_rename_missing_tenant() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().times(0);

        let service = TenantService::new(Arc::new(repo));
        let result = service.rename(&Uuid::new_v4(), "Acme", Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::TenantNotFound)));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(DomainError::PersistenceError("connection reset".to_string())));

        let service = TenantService::new(Arc::new(repo));
        let result = service.get(&Uuid::new_v4()).await;

        assert!(matches!(result, Err(DomainError::PersistenceError(_))));
    }
}
