//! # skillbase-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors
//! for the change-proposal staging and moderation engine.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AdviceStatus, CareerAdvice, ChangeRecord, ChangeStatus, NewChange, Resource, ResourceDraft,
    ResourceStatus, Role, Skill, Tag, User, RESOURCE_FIELD, TAG_FIELD,
};
pub use error::DomainError;
pub use traits::{
    CatalogRepository, ChangeRecordRepository, ContentScreener, PendingFilter, RepoResult,
    UserRepository,
};
pub use value_objects::{EntityKind, EntityKindParseError, Id, IdParseError};
