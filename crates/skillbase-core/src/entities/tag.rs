//! Tag entity - a globally unique label attached to skills or career advice

use crate::value_objects::Id;

/// Tag with a globally unique name. Attaching an existing name must reuse the
/// row and only create a new association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}
