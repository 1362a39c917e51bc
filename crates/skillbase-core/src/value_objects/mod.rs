//! Value objects - identifiers and closed enumerations

mod entity_kind;
mod id;

pub use entity_kind::{EntityKind, EntityKindParseError};
pub use id::{Id, IdParseError};
