//! # skillbase-service
//!
//! Application layer containing the proposal, moderation, and catalog
//! services, the content screener, DTOs, and the service dependency
//! container.

pub mod dto;
pub mod services;

pub use services::{
    CatalogService, ModerationService, ProposalService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TermListScreener,
};
