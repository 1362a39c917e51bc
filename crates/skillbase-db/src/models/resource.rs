//! Resource database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the resources table
#[derive(Debug, Clone, FromRow)]
pub struct ResourceModel {
    pub id: i64,
    pub skill_id: i64,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub url: String,
    pub is_paid: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
