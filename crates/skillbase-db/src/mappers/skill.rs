//! Skill model → entity mapper

use skillbase_core::{Id, Skill};

use crate::models::SkillModel;

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: Id::new(model.id),
            name: model.name,
            description: model.description,
            category: model.category,
            difficulty_level: model.difficulty_level,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
