//! # skillbase-db
//!
//! Database layer implementing the domain's repository traits with PostgreSQL
//! via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations (change records, users, catalog)
//! - The per-kind entity applier that materializes approved changes
//! - Transaction-scoped change-record helpers used by the moderation service
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skillbase_db::pool::{create_pool, DatabaseConfig};
//! use skillbase_db::PgChangeRecordRepository;
//! use skillbase_core::ChangeRecordRepository;
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(url, 10, 1);
//!     let pool = create_pool(&config).await?;
//!     let changes = PgChangeRecordRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod applier;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use applier::{applier_for, CareerAdviceApplier, KindApplier, SkillApplier};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    changes_tx, PgCatalogRepository, PgChangeRecordRepository, PgUserRepository,
};

/// Embedded SQL migrations, runnable at startup via `MIGRATOR.run(&pool)`
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
