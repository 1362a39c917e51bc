//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ChangeStatus;
use crate::value_objects::{EntityKind, Id};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Change record not found: {0}")]
    ChangeNotFound(Id),

    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: EntityKind, id: Id },

    #[error("User not found: {0}")]
    UserNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Proposed value for '{field}' violates the content policy")]
    ContentRejected { field: String },

    #[error("Unknown field '{field}' for {kind}")]
    UnknownField { kind: EntityKind, field: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("Change record {id} is not pending (status: {status})")]
    InvalidState { id: Id, status: ChangeStatus },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ChangeNotFound(_) => "UNKNOWN_CHANGE",
            Self::EntityNotFound { .. } => "UNKNOWN_ENTITY",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ContentRejected { .. } => "CONTENT_REJECTED",
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChangeNotFound(_) | Self::EntityNotFound { .. } | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation-class error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownField { .. })
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a state conflict (record no longer pending)
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Check if the content screener rejected a value
    #[must_use]
    pub fn is_content_rejected(&self) -> bool {
        matches!(self, Self::ContentRejected { .. })
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ChangeNotFound(Id::new(1));
        assert_eq!(err.code(), "UNKNOWN_CHANGE");

        let err = DomainError::UnknownField {
            kind: EntityKind::Skill,
            field: "emoji".to_string(),
        };
        assert_eq!(err.code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_classifiers() {
        assert!(DomainError::ChangeNotFound(Id::new(1)).is_not_found());
        assert!(DomainError::UserNotFound(Id::new(1)).is_not_found());
        assert!(DomainError::validation("missing seed").is_validation());
        assert!(DomainError::forbidden("admin required").is_forbidden());
        assert!(DomainError::InvalidState {
            id: Id::new(1),
            status: ChangeStatus::Approved,
        }
        .is_conflict());
        assert!(DomainError::ContentRejected { field: "name".to_string() }.is_content_rejected());
        assert!(!DomainError::Store("down".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::EntityNotFound {
            kind: EntityKind::Skill,
            id: Id::new(7),
        };
        assert_eq!(err.to_string(), "skill not found: 7");

        let err = DomainError::InvalidState {
            id: Id::new(3),
            status: ChangeStatus::Approved,
        };
        assert_eq!(err.to_string(), "Change record 3 is not pending (status: approved)");
    }
}
