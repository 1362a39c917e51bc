//! Resource model → entity mapper

use skillbase_core::{DomainError, Id, Resource};

use crate::models::ResourceModel;

use super::parse_resource_status;

impl TryFrom<ResourceModel> for Resource {
    type Error = DomainError;

    fn try_from(model: ResourceModel) -> Result<Self, Self::Error> {
        Ok(Resource {
            id: Id::new(model.id),
            skill_id: Id::new(model.skill_id),
            title: model.title,
            description: model.description,
            resource_type: model.resource_type,
            url: model.url,
            is_paid: model.is_paid,
            status: parse_resource_status(&model.status)?,
            created_at: model.created_at,
        })
    }
}
