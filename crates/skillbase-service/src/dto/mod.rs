//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ModerationRequest, PendingQueueQuery, ResourceDraftRequest, SearchQuery, SubmitEditRequest,
    SubmitEntityRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApprovalResponse, CareerAdviceResponse, ChangeRecordResponse, HealthResponse,
    ProposalAcceptedResponse, ReadinessResponse, RejectionResponse, ResourceResponse,
    SkillResponse, SkillWithResourcesResponse,
};
