//! Career advice model → entity mapper

use skillbase_core::{CareerAdvice, DomainError, Id};

use crate::models::CareerAdviceModel;

use super::parse_advice_status;

impl TryFrom<CareerAdviceModel> for CareerAdvice {
    type Error = DomainError;

    fn try_from(model: CareerAdviceModel) -> Result<Self, Self::Error> {
        Ok(CareerAdvice {
            id: Id::new(model.id),
            title: model.title,
            industry: model.industry,
            career_stage: model.career_stage,
            content: model.content,
            status: parse_advice_status(&model.status)?,
            author_id: model.author_id.map(Id::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
