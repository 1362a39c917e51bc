//! Change record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the change_records table
#[derive(Debug, Clone, FromRow)]
pub struct ChangeRecordModel {
    pub id: i64,
    pub entity_kind: String,
    pub entity_id: Option<i64>,
    pub field_name: String,
    pub current_value: Option<String>,
    pub proposed_value: String,
    pub proposer_id: i64,
    pub is_new_entity: bool,
    pub batch_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
