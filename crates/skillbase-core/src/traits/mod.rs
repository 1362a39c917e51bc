//! Repository and collaborator traits (ports)

mod repositories;

pub use repositories::{
    CatalogRepository, ChangeRecordRepository, ContentScreener, PendingFilter, RepoResult,
    UserRepository,
};
