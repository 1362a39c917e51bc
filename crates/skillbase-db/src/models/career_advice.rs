//! Career advice database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the career_advice table
#[derive(Debug, Clone, FromRow)]
pub struct CareerAdviceModel {
    pub id: i64,
    pub title: String,
    pub industry: String,
    pub career_stage: String,
    pub content: String,
    pub status: String,
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
