//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The approval transaction itself is owned by
//! the moderation service and runs against transaction-scoped helpers in the
//! db crate; the traits here cover everything that operates at pool level.

use async_trait::async_trait;

use crate::entities::{CareerAdvice, ChangeRecord, NewChange, Resource, Skill, User};
use crate::error::DomainError;
use crate::value_objects::{EntityKind, Id};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter for the pending review queue.
///
/// With `entity_id` set, only that entity's edits are returned. Without it,
/// `include_new` controls whether new-entity bundle records appear alongside
/// edits or the listing is restricted to edits only.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    pub kind: Option<EntityKind>,
    pub entity_id: Option<Id>,
    pub include_new: bool,
}

// ============================================================================
// Change Record Repository
// ============================================================================

#[async_trait]
pub trait ChangeRecordRepository: Send + Sync {
    /// Find a change record by id
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ChangeRecord>>;

    /// Stage a single change record, returning the assigned id
    async fn stage(&self, change: &NewChange) -> RepoResult<Id>;

    /// Stage every record of a new-entity bundle in one transaction.
    ///
    /// Returns the assigned ids in input order; partial failure rolls the
    /// whole bundle back.
    async fn stage_bundle(&self, changes: &[NewChange]) -> RepoResult<Vec<Id>>;

    /// List pending records matching the filter
    async fn list_pending(&self, filter: &PendingFilter) -> RepoResult<Vec<ChangeRecord>>;

    /// Transition a pending record to rejected.
    ///
    /// Returns `false` when the record exists but is no longer pending; the
    /// guard keeps terminal statuses monotonic under racing reviewers.
    async fn mark_rejected(&self, id: Id) -> RepoResult<bool>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id; moderation reads only the role
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;
}

// ============================================================================
// Catalog Repository
// ============================================================================

/// Read-only listing and search over the live domain tables.
///
/// No method here mutates anything; failures surface as store errors with no
/// side effects.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all skills
    async fn list_skills(&self) -> RepoResult<Vec<Skill>>;

    /// List the approved resources of one skill
    async fn list_skill_resources(&self, skill_id: Id) -> RepoResult<Vec<Resource>>;

    /// List the approved resources of several skills at once
    async fn list_resources_for_skills(&self, skill_ids: &[Id]) -> RepoResult<Vec<Resource>>;

    /// List published career-advice articles
    async fn list_published_advice(&self) -> RepoResult<Vec<CareerAdvice>>;

    /// Search skills by name or description
    async fn search_skills(&self, query: &str, limit: i64) -> RepoResult<Vec<Skill>>;

    /// Search published career advice by title, industry, or career stage
    async fn search_advice(&self, query: &str, limit: i64) -> RepoResult<Vec<CareerAdvice>>;
}

// ============================================================================
// Content Screener
// ============================================================================

/// External content-safety capability.
///
/// `scan` is a pure function of the input text and must be consulted before
/// any staging write; `true` means the value violates the content policy.
#[async_trait]
pub trait ContentScreener: Send + Sync {
    async fn scan(&self, text: &str) -> RepoResult<bool>;
}
