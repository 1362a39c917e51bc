//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, content screening, and orchestration of the moderation
//! workflow.

pub mod catalog;
pub mod context;
pub mod error;
pub mod moderation;
pub mod proposal;
pub mod screen;

// Re-export all services for convenience
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use proposal::ProposalService;
pub use screen::TermListScreener;
