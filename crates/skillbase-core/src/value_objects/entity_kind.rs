//! Entity kind - the closed set of moderated entity types
//!
//! The kind carries everything that varies per entity type: the editable-field
//! allow-list, the seed field that identifies a new entity, and whether the
//! kind owns attached resources. Field names proposed by members are resolved
//! against the allow-list before they get anywhere near a SQL statement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderated entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Skill,
    CareerAdvice,
}

impl EntityKind {
    /// All supported kinds
    pub const ALL: [EntityKind; 2] = [EntityKind::Skill, EntityKind::CareerAdvice];

    /// Stable string form, used in the database and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::CareerAdvice => "career_advice",
        }
    }

    /// The field a new-entity bundle must contain; its value seeds the row
    #[must_use]
    pub const fn seed_field(self) -> &'static str {
        match self {
            Self::Skill => "name",
            Self::CareerAdvice => "title",
        }
    }

    /// Columns a member may propose changes to
    #[must_use]
    pub const fn editable_fields(self) -> &'static [&'static str] {
        match self {
            Self::Skill => &["name", "description", "category", "difficulty_level"],
            Self::CareerAdvice => &["title", "industry", "career_stage", "content"],
        }
    }

    /// Resolve a proposed field name against the allow-list.
    ///
    /// Returns the canonical `'static` column name so callers never build SQL
    /// from caller-supplied strings.
    #[must_use]
    pub fn resolve_field(self, name: &str) -> Option<&'static str> {
        self.editable_fields().iter().find(|f| **f == name).copied()
    }

    /// Whether entities of this kind own attached resources
    #[must_use]
    pub const fn owns_resources(self) -> bool {
        matches!(self, Self::Skill)
    }
}

/// Error when parsing an EntityKind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityKindParseError {
    #[error("unknown entity kind: {0}")]
    Unknown(String),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = EntityKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill" => Ok(Self::Skill),
            "career_advice" => Ok(Self::CareerAdvice),
            other => Err(EntityKindParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("guild".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_seed_field_is_editable() {
        for kind in EntityKind::ALL {
            assert!(kind.resolve_field(kind.seed_field()).is_some());
        }
    }

    #[test]
    fn test_resolve_field_rejects_unknown_columns() {
        assert_eq!(EntityKind::Skill.resolve_field("category"), Some("category"));
        assert_eq!(EntityKind::Skill.resolve_field("industry"), None);
        // Reserved relation markers are never scalar columns
        assert_eq!(EntityKind::Skill.resolve_field("tag"), None);
        assert_eq!(EntityKind::CareerAdvice.resolve_field("resource"), None);
        // No interpolation escape hatches
        assert_eq!(EntityKind::Skill.resolve_field("name; DROP TABLE skills"), None);
    }

    #[test]
    fn test_resource_ownership() {
        assert!(EntityKind::Skill.owns_resources());
        assert!(!EntityKind::CareerAdvice.owns_resources());
    }
}
