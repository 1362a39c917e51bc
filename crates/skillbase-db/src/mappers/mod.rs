//! Entity ↔ model mappers
//!
//! Status and kind columns are stored as TEXT under CHECK constraints, so an
//! unparseable value means the row was written outside this application; the
//! mappers surface that as a store error instead of guessing.

mod career_advice;
mod change_record;
mod resource;
mod skill;
mod tag;
mod user;

use skillbase_core::{AdviceStatus, ChangeStatus, DomainError, EntityKind, ResourceStatus, Role};

pub(crate) fn parse_kind(raw: &str) -> Result<EntityKind, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::Store(format!("unexpected entity kind '{raw}'")))
}

pub(crate) fn parse_change_status(raw: &str) -> Result<ChangeStatus, DomainError> {
    match raw {
        "pending" => Ok(ChangeStatus::Pending),
        "approved" => Ok(ChangeStatus::Approved),
        "rejected" => Ok(ChangeStatus::Rejected),
        other => Err(DomainError::Store(format!("unexpected change status '{other}'"))),
    }
}

pub(crate) fn parse_advice_status(raw: &str) -> Result<AdviceStatus, DomainError> {
    match raw {
        "draft" => Ok(AdviceStatus::Draft),
        "published" => Ok(AdviceStatus::Published),
        other => Err(DomainError::Store(format!("unexpected advice status '{other}'"))),
    }
}

pub(crate) fn parse_resource_status(raw: &str) -> Result<ResourceStatus, DomainError> {
    match raw {
        "pending" => Ok(ResourceStatus::Pending),
        "approved" => Ok(ResourceStatus::Approved),
        other => Err(DomainError::Store(format!("unexpected resource status '{other}'"))),
    }
}

pub(crate) fn parse_role(raw: &str) -> Result<Role, DomainError> {
    match raw {
        "member" => Ok(Role::Member),
        "admin" => Ok(Role::Admin),
        other => Err(DomainError::Store(format!("unexpected role '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers_accept_stored_forms() {
        assert_eq!(parse_kind("skill").unwrap(), EntityKind::Skill);
        assert_eq!(parse_change_status("approved").unwrap(), ChangeStatus::Approved);
        assert_eq!(parse_advice_status("published").unwrap(), AdviceStatus::Published);
        assert_eq!(parse_resource_status("pending").unwrap(), ResourceStatus::Pending);
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
    }

    #[test]
    fn test_parse_helpers_reject_foreign_values() {
        assert!(parse_kind("guild").is_err());
        assert!(parse_change_status("merged").is_err());
        assert!(parse_role("owner").is_err());
    }
}
