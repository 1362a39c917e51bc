//! Skill entity - a learnable skill in the knowledge base

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Skill entity. Rows are created and mutated only by the entity applier as
/// the side effect of an approved change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
