//! Change record - the staging unit of the moderation engine
//!
//! One row per proposed (entity, field, value) fact. A single-field edit is
//! one record; a new-entity submission is a bundle of records sharing a
//! `batch_id`. Records are never deleted - terminal rows stay behind as the
//! audit trail of the review queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::value_objects::{EntityKind, Id};

/// Reserved field name marking a tag attachment rather than a scalar field
pub const TAG_FIELD: &str = "tag";

/// Reserved field name marking a resource attachment; the proposed value is a
/// JSON-serialized [`crate::entities::ResourceDraft`]
pub const RESOURCE_FIELD: &str = "resource";

/// Lifecycle status of a change record.
///
/// `Pending` is initial; `Approved` and `Rejected` are terminal. Transitions
/// are monotonic - a terminal record never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Pending,
    Approved,
    Rejected,
}

impl ChangeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether no further transition is permitted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staged change awaiting review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub id: Id,
    pub entity_kind: EntityKind,
    /// Target entity for edits; `None` for new-entity bundle records
    pub entity_id: Option<Id>,
    /// Column name, or the reserved `"tag"` / `"resource"` markers
    pub field_name: String,
    /// Informational snapshot of the prior value; not enforced against drift
    pub current_value: Option<String>,
    pub proposed_value: String,
    pub proposer_id: Id,
    pub is_new_entity: bool,
    /// Correlation id shared by every record of one new-entity submission
    pub batch_id: Option<Uuid>,
    pub status: ChangeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChangeRecord {
    /// Whether this record patches a field of an existing entity
    #[inline]
    #[must_use]
    pub fn is_edit(&self) -> bool {
        !self.is_new_entity
    }

    /// Whether this record attaches a tag
    #[inline]
    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.field_name == TAG_FIELD
    }

    /// Whether this record attaches a resource
    #[inline]
    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.field_name == RESOURCE_FIELD
    }

    /// Whether this record carries the seed field of its kind
    #[must_use]
    pub fn is_seed(&self) -> bool {
        self.field_name == self.entity_kind.seed_field()
    }
}

/// A change record about to be staged (no id or timestamps yet - the store
/// assigns those on insert)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChange {
    pub entity_kind: EntityKind,
    pub entity_id: Option<Id>,
    pub field_name: String,
    pub current_value: Option<String>,
    pub proposed_value: String,
    pub proposer_id: Id,
    pub is_new_entity: bool,
    pub batch_id: Option<Uuid>,
}

impl NewChange {
    /// A single-field edit of an existing entity
    #[must_use]
    pub fn edit(
        kind: EntityKind,
        entity_id: Id,
        field_name: impl Into<String>,
        proposed_value: impl Into<String>,
        current_value: Option<String>,
        proposer_id: Id,
    ) -> Self {
        Self {
            entity_kind: kind,
            entity_id: Some(entity_id),
            field_name: field_name.into(),
            current_value,
            proposed_value: proposed_value.into(),
            proposer_id,
            is_new_entity: false,
            batch_id: None,
        }
    }

    /// A scalar field of a new-entity bundle
    #[must_use]
    pub fn bundle_field(
        kind: EntityKind,
        field_name: impl Into<String>,
        proposed_value: impl Into<String>,
        proposer_id: Id,
        batch_id: Uuid,
    ) -> Self {
        Self {
            entity_kind: kind,
            entity_id: None,
            field_name: field_name.into(),
            current_value: None,
            proposed_value: proposed_value.into(),
            proposer_id,
            is_new_entity: true,
            batch_id: Some(batch_id),
        }
    }

    /// A tag attachment of a new-entity bundle
    #[must_use]
    pub fn bundle_tag(
        kind: EntityKind,
        tag_name: impl Into<String>,
        proposer_id: Id,
        batch_id: Uuid,
    ) -> Self {
        Self {
            entity_kind: kind,
            entity_id: None,
            field_name: TAG_FIELD.to_string(),
            current_value: None,
            proposed_value: tag_name.into(),
            proposer_id,
            is_new_entity: true,
            batch_id: Some(batch_id),
        }
    }

    /// A resource attachment of a new-entity bundle; `stored_draft` is the
    /// JSON-serialized resource aggregate
    #[must_use]
    pub fn bundle_resource(
        kind: EntityKind,
        stored_draft: String,
        proposer_id: Id,
        batch_id: Uuid,
    ) -> Self {
        Self {
            entity_kind: kind,
            entity_id: None,
            field_name: RESOURCE_FIELD.to_string(),
            current_value: None,
            proposed_value: stored_draft,
            proposer_id,
            is_new_entity: true,
            batch_id: Some(batch_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminality() {
        assert!(!ChangeStatus::Pending.is_terminal());
        assert!(ChangeStatus::Approved.is_terminal());
        assert!(ChangeStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_edit_constructor_invariants() {
        let change = NewChange::edit(
            EntityKind::Skill,
            Id::new(7),
            "category",
            "Data",
            Some("Engineering".to_string()),
            Id::new(3),
        );
        assert!(!change.is_new_entity);
        assert_eq!(change.entity_id, Some(Id::new(7)));
        assert!(change.batch_id.is_none());
    }

    #[test]
    fn test_bundle_constructors_share_batch() {
        let batch = Uuid::new_v4();
        let field =
            NewChange::bundle_field(EntityKind::CareerAdvice, "title", "Switching to SRE", Id::new(3), batch);
        let tag = NewChange::bundle_tag(EntityKind::CareerAdvice, "career-change", Id::new(3), batch);
        assert!(field.is_new_entity && tag.is_new_entity);
        assert!(field.entity_id.is_none() && tag.entity_id.is_none());
        assert_eq!(field.batch_id, Some(batch));
        assert_eq!(tag.batch_id, Some(batch));
        assert_eq!(tag.field_name, TAG_FIELD);
    }

    #[test]
    fn test_record_classifiers() {
        let record = ChangeRecord {
            id: Id::new(1),
            entity_kind: EntityKind::Skill,
            entity_id: None,
            field_name: "name".to_string(),
            current_value: None,
            proposed_value: "Rust".to_string(),
            proposer_id: Id::new(2),
            is_new_entity: true,
            batch_id: Some(Uuid::new_v4()),
            status: ChangeStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(!record.is_edit());
        assert!(record.is_seed());
        assert!(!record.is_tag());
        assert!(!record.is_resource());
    }
}
