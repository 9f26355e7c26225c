// ============================================================================
// Platform Core - Tenant Record Entity
// File: crates/platform-core/src/domain/tenant_record.rs
// Description: Tenant identity used to scope data in a multi-tenant system
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use platform_shared::types::{new_id, AuditFields, Auditable};

/// Tenant record entity
///
/// `id` is assigned once at provisioning and has no setter. The display name
/// only changes through [`TenantRecord::rename`] so every change is stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TenantRecord {
    id: Uuid,

    /// Secondary key from an external numbering scheme.
    tenant_numeric_id: i64,

    #[validate(length(min = 2, max = 100, message = "Tenant name must be between 2 and 100 characters"))]
    tenant_name: String,

    #[serde(flatten)]
    audit: AuditFields,
}

impl TenantRecord {
    /// Provision a new tenant with a fresh id.
    pub fn new(
        tenant_numeric_id: i64,
        tenant_name: String,
        created_by: Option<Uuid>,
    ) -> Result<Self, ValidationErrors> {
        let tenant = Self {
            id: new_id(),
            tenant_numeric_id,
            tenant_name: tenant_name.trim().to_string(),
            audit: AuditFields::created_by(created_by),
        };

        tenant.validate()?;
        Ok(tenant)
    }

    /// Rebuild a record read back from storage. Values are kept as given.
    pub fn from_parts(
        id: Uuid,
        tenant_numeric_id: i64,
        tenant_name: String,
        audit: AuditFields,
    ) -> Self {
        Self {
            id,
            tenant_numeric_id,
            tenant_name,
            audit,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_numeric_id(&self) -> i64 {
        self.tenant_numeric_id
    }

    pub fn tenant_name(&self) -> &str {
        &self.tenant_name
    }

    /// Administrative rename. Leaves the record untouched if the new name is invalid.
    pub fn rename(&mut self, tenant_name: String, modified_by: Uuid) -> Result<(), ValidationErrors> {
        let previous = std::mem::replace(&mut self.tenant_name, tenant_name.trim().to_string());
        if let Err(errors) = self.validate() {
            self.tenant_name = previous;
            return Err(errors);
        }

        self.touch(modified_by);
        Ok(())
    }
}

impl Auditable for TenantRecord {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tenant() {
        let creator = Uuid::new_v4();
        let tenant = TenantRecord::new(42, "  Acme  ".to_string(), Some(creator)).unwrap();

        assert_eq!(tenant.tenant_numeric_id(), 42);
        assert_eq!(tenant.tenant_name(), "Acme");
        assert_eq!(tenant.audit().created_by, Some(creator));
        assert!(tenant.audit().modified_at.is_none());
        assert!(!tenant.is_removed());
    }

    #[test]
    fn test_create_tenant_rejects_short_name() {
        assert!(TenantRecord::new(1, " A ".to_string(), None).is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TenantRecord::new(1, "Acme".to_string(), None).unwrap();
        let b = TenantRecord::new(1, "Acme".to_string(), None).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_parts_keeps_values() {
        let id = Uuid::new_v4();
        let audit = AuditFields::default();
        let tenant = TenantRecord::from_parts(id, 42, "Acme".to_string(), audit.clone());

        assert_eq!(tenant.id(), id);
        assert_eq!(tenant.tenant_numeric_id(), 42);
        assert_eq!(tenant.tenant_name(), "Acme");
        assert_eq!(tenant.audit(), &audit);
    }

    #[test]
    fn test_rename_stamps_modification() {
        let mut tenant = TenantRecord::new(42, "Acme".to_string(), None).unwrap();
        let id = tenant.id();
        let admin = Uuid::new_v4();

        tenant.rename("Acme Corp".to_string(), admin).unwrap();

        assert_eq!(tenant.tenant_name(), "Acme Corp");
        assert_eq!(tenant.id(), id);
        assert_eq!(tenant.audit().modified_by, Some(admin));
        assert!(tenant.audit().modified_at.is_some());
    }

    #[test]
    fn test_invalid_rename_is_rolled_back() {
        let mut tenant = TenantRecord::new(42, "Acme".to_string(), None).unwrap();

        assert!(tenant.rename("x".repeat(101), Uuid::new_v4()).is_err());

        assert_eq!(tenant.tenant_name(), "Acme");
        assert!(tenant.audit().modified_by.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let tenant = TenantRecord::new(42, "Acme".to_string(), Some(Uuid::new_v4())).unwrap();

        let json = serde_json::to_value(&tenant).unwrap();
        assert_eq!(json["tenant_numeric_id"], 42);
        assert_eq!(json["tenant_name"], "Acme");
        assert!(json.get("created_at").is_some());

        let back: TenantRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, tenant);
    }
}
