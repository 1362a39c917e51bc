//! Change record model → entity mapper

use skillbase_core::{ChangeRecord, DomainError, Id};

use crate::models::ChangeRecordModel;

use super::{parse_change_status, parse_kind};

impl TryFrom<ChangeRecordModel> for ChangeRecord {
    type Error = DomainError;

    fn try_from(model: ChangeRecordModel) -> Result<Self, Self::Error> {
        Ok(ChangeRecord {
            id: Id::new(model.id),
            entity_kind: parse_kind(&model.entity_kind)?,
            entity_id: model.entity_id.map(Id::new),
            field_name: model.field_name,
            current_value: model.current_value,
            proposed_value: model.proposed_value,
            proposer_id: Id::new(model.proposer_id),
            is_new_entity: model.is_new_entity,
            batch_id: model.batch_id,
            status: parse_change_status(&model.status)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
