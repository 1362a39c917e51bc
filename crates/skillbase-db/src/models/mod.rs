//! Database models - `FromRow` structs mirroring the table layouts

mod career_advice;
mod change_record;
mod resource;
mod skill;
mod tag;
mod user;

pub use career_advice::CareerAdviceModel;
pub use change_record::ChangeRecordModel;
pub use resource::ResourceModel;
pub use skill::SkillModel;
pub use tag::TagModel;
pub use user::UserModel;
