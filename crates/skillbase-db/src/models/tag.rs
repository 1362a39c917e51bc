//! Tag database model

use sqlx::FromRow;

/// Database model for the tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}
