//! Axum extractors for request handling
//!
//! Custom extractors for validated request bodies and query strings.

mod validated;

pub use validated::{ValidatedJson, ValidatedQuery};
