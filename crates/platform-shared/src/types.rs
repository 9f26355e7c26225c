//! Common types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Lifecycle metadata carried by auditable entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_at: DateTime<Utc>,
    pub created_by: Option<EntityId>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<EntityId>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<EntityId>,
}

impl AuditFields {
    pub fn created_by(actor: Option<EntityId>) -> Self {
        Self {
            created_by: actor,
            ..Self::default()
        }
    }
}

impl Default for AuditFields {
    fn default() -> Self {
        Self {
            created_at: Utc::now(),
            created_by: None,
            modified_at: None,
            modified_by: None,
            removed_at: None,
            removed_by: None,
        }
    }
}

/// Capability for entities that carry [`AuditFields`].
///
/// Implementors only expose their audit block; the stamping helpers are
/// shared so every entity records modifications the same way.
pub trait Auditable {
    fn audit(&self) -> &AuditFields;

    fn audit_mut(&mut self) -> &mut AuditFields;

    fn created_at(&self) -> DateTime<Utc> {
        self.audit().created_at
    }

    /// Stamp a modification by `actor`.
    fn touch(&mut self, actor: EntityId) {
        let audit = self.audit_mut();
        audit.modified_at = Some(Utc::now());
        audit.modified_by = Some(actor);
    }

    /// Record removal. Does not destroy the entity.
    fn mark_removed(&mut self, actor: EntityId) {
        let audit = self.audit_mut();
        audit.removed_at = Some(Utc::now());
        audit.removed_by = Some(actor);
    }

    fn is_removed(&self) -> bool {
        self.audit().removed_at.is_some()
    }
}
