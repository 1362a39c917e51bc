//! Tag model → entity mapper

use skillbase_core::{Id, Tag};

use crate::models::TagModel;

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: Id::new(model.id),
            name: model.name,
        }
    }
}
