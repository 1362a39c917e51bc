//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry free text,
//! `Validate` for input validation.

use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use skillbase_core::entities::ResourceDraft;
use skillbase_core::value_objects::EntityKind;

// ============================================================================
// Proposal Requests
// ============================================================================

/// Submit a single-field edit of an existing entity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitEditRequest {
    pub entity_kind: EntityKind,

    pub entity_id: i64,

    #[validate(length(min = 1, max = 64, message = "Field name must be 1-64 characters"))]
    pub field_name: String,

    #[validate(length(min = 1, max = 20000, message = "Proposed value must be 1-20000 characters"))]
    pub proposed_value: String,

    /// Snapshot of the value the proposer saw; informational only
    pub current_value: Option<String>,

    pub proposer_id: i64,
}

/// A resource carried inside a new-entity submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResourceDraftRequest {
    #[validate(length(min = 1, max = 200, message = "Resource title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Resource description must be at most 2000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "Resource type must be 1-50 characters"))]
    pub resource_type: String,

    #[validate(url(message = "Resource url must be a valid URL"))]
    pub url: String,

    #[serde(default)]
    pub is_paid: bool,
}

impl From<ResourceDraftRequest> for ResourceDraft {
    fn from(request: ResourceDraftRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            resource_type: request.resource_type,
            url: request.url,
            is_paid: request.is_paid,
        }
    }
}

/// Submit a new entity as a bundle of field values, tags, and resources
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitEntityRequest {
    pub entity_kind: EntityKind,

    /// Scalar field values; must include the kind's seed field
    pub fields: HashMap<String, String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub resources: Vec<ResourceDraftRequest>,

    pub proposer_id: i64,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Approve or reject a change record; the actor is the authenticated reviewer
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationRequest {
    pub actor_id: i64,
}

/// Filter query for the pending review queue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingQueueQuery {
    pub kind: Option<EntityKind>,

    pub entity_id: Option<i64>,

    /// Include new-entity bundle records alongside edits
    #[serde(default)]
    pub include_new: bool,
}

// ============================================================================
// Catalog Requests
// ============================================================================

/// Catalog search query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1, max = 200, message = "Query must be 1-200 characters"))]
    pub q: String,

    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_request_validation() {
        let request = SubmitEditRequest {
            entity_kind: EntityKind::Skill,
            entity_id: 1,
            field_name: "description".to_string(),
            proposed_value: "better text".to_string(),
            current_value: None,
            proposer_id: 2,
        };
        assert!(request.validate().is_ok());

        let empty_value = SubmitEditRequest {
            proposed_value: String::new(),
            ..request
        };
        assert!(empty_value.validate().is_err());
    }

    #[test]
    fn test_nested_resource_validation() {
        let request = SubmitEntityRequest {
            entity_kind: EntityKind::Skill,
            fields: HashMap::from([("name".to_string(), "Rust".to_string())]),
            tags: vec![],
            resources: vec![ResourceDraftRequest {
                title: "The Book".to_string(),
                description: String::new(),
                resource_type: "book".to_string(),
                url: "not a url".to_string(),
                is_paid: false,
            }],
            proposer_id: 2,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_queue_query_defaults() {
        let query: PendingQueueQuery = serde_json::from_str("{}").unwrap();
        assert!(query.kind.is_none());
        assert!(query.entity_id.is_none());
        assert!(!query.include_new);
    }
}
