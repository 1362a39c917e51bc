//! User model → entity mapper

use skillbase_core::{DomainError, Id, User};

use crate::models::UserModel;

use super::parse_role;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: Id::new(model.id),
            display_name: model.display_name,
            email: model.email,
            role: parse_role(&model.role)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
