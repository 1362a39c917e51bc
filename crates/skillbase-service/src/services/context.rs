//! Service context - dependency container for services
//!
//! Holds the connection pool and the repository/screener implementations the
//! services run against. The pool is exposed directly because the moderation
//! service owns its approval transaction.

use std::sync::Arc;

use skillbase_core::traits::{
    CatalogRepository, ChangeRecordRepository, ContentScreener, UserRepository,
};
use skillbase_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    change_repo: Arc<dyn ChangeRecordRepository>,
    user_repo: Arc<dyn UserRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,

    // Content safety
    screener: Arc<dyn ContentScreener>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        change_repo: Arc<dyn ChangeRecordRepository>,
        user_repo: Arc<dyn UserRepository>,
        catalog_repo: Arc<dyn CatalogRepository>,
        screener: Arc<dyn ContentScreener>,
    ) -> Self {
        Self {
            pool,
            change_repo,
            user_repo,
            catalog_repo,
            screener,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the change record repository
    pub fn change_repo(&self) -> &dyn ChangeRecordRepository {
        self.change_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the catalog repository
    pub fn catalog_repo(&self) -> &dyn CatalogRepository {
        self.catalog_repo.as_ref()
    }

    /// Get the content screener
    pub fn screener(&self) -> &dyn ContentScreener {
        self.screener.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("screener", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    change_repo: Option<Arc<dyn ChangeRecordRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    catalog_repo: Option<Arc<dyn CatalogRepository>>,
    screener: Option<Arc<dyn ContentScreener>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn change_repo(mut self, repo: Arc<dyn ChangeRecordRepository>) -> Self {
        self.change_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn catalog_repo(mut self, repo: Arc<dyn CatalogRepository>) -> Self {
        self.catalog_repo = Some(repo);
        self
    }

    pub fn screener(mut self, screener: Arc<dyn ContentScreener>) -> Self {
        self.screener = Some(screener);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.change_repo
                .ok_or_else(|| ServiceError::validation("change_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.catalog_repo
                .ok_or_else(|| ServiceError::validation("catalog_repo is required"))?,
            self.screener
                .ok_or_else(|| ServiceError::validation("screener is required"))?,
        ))
    }
}
