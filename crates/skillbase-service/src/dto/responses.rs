//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use skillbase_core::entities::{CareerAdvice, ChangeRecord, Resource, Skill};

// ============================================================================
// Proposal Responses
// ============================================================================

/// A staged proposal, waiting in the review queue
#[derive(Debug, Serialize)]
pub struct ProposalAcceptedResponse {
    pub change_id: i64,
}

// ============================================================================
// Moderation Responses
// ============================================================================

/// One change record of the review queue
#[derive(Debug, Serialize)]
pub struct ChangeRecordResponse {
    pub id: i64,
    pub entity_kind: &'static str,
    pub entity_id: Option<i64>,
    pub field_name: String,
    pub current_value: Option<String>,
    pub proposed_value: String,
    pub proposer_id: i64,
    pub is_new_entity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<Uuid>,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ChangeRecord> for ChangeRecordResponse {
    fn from(record: ChangeRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            entity_kind: record.entity_kind.as_str(),
            entity_id: record.entity_id.map(skillbase_core::Id::into_inner),
            field_name: record.field_name,
            current_value: record.current_value,
            proposed_value: record.proposed_value,
            proposer_id: record.proposer_id.into_inner(),
            is_new_entity: record.is_new_entity,
            batch_id: record.batch_id,
            status: record.status.as_str(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Outcome of an approval; `new_entity_id` is set for bundle approvals
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub change_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_entity_id: Option<i64>,
}

/// Outcome of a rejection
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub change_id: i64,
}

// ============================================================================
// Catalog Responses
// ============================================================================

/// Skill catalog entry
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.into_inner(),
            name: skill.name,
            description: skill.description,
            category: skill.category,
            difficulty_level: skill.difficulty_level,
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

/// Approved learning resource of a skill
#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    pub id: i64,
    pub skill_id: i64,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub url: String,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id.into_inner(),
            skill_id: resource.skill_id.into_inner(),
            title: resource.title,
            description: resource.description,
            resource_type: resource.resource_type,
            url: resource.url,
            is_paid: resource.is_paid,
            created_at: resource.created_at,
        }
    }
}

/// A search hit together with its approved resources
#[derive(Debug, Serialize)]
pub struct SkillWithResourcesResponse {
    pub skill: SkillResponse,
    pub resources: Vec<ResourceResponse>,
}

/// Published career-advice article
#[derive(Debug, Serialize)]
pub struct CareerAdviceResponse {
    pub id: i64,
    pub title: String,
    pub industry: String,
    pub career_stage: String,
    pub content: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CareerAdvice> for CareerAdviceResponse {
    fn from(advice: CareerAdvice) -> Self {
        Self {
            id: advice.id.into_inner(),
            title: advice.title,
            industry: advice.industry,
            career_stage: advice.career_stage,
            content: advice.content,
            status: advice.status.as_str(),
            author_id: advice.author_id.map(skillbase_core::Id::into_inner),
            created_at: advice.created_at,
            updated_at: advice.updated_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}
