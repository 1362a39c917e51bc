//! Skill database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
