//! Domain entities - core business objects

mod career_advice;
mod change_record;
mod resource;
mod skill;
mod tag;
mod user;

pub use career_advice::{AdviceStatus, CareerAdvice};
pub use change_record::{ChangeRecord, ChangeStatus, NewChange, RESOURCE_FIELD, TAG_FIELD};
pub use resource::{Resource, ResourceDraft, ResourceStatus};
pub use skill::Skill;
pub use tag::Tag;
pub use user::{Role, User};
