//! # skillbase-common
//!
//! Shared utilities: application configuration, the unified error type, and
//! tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, DatabaseSettings, Environment, ScreenerSettings, ServerSettings};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
