//! Resource entity - an external learning resource attached to a skill

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Id;

/// Review status of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Pending,
    Approved,
}

impl ResourceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource entity owned by a skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: Id,
    pub skill_id: Id,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub url: String,
    pub is_paid: bool,
    pub status: ResourceStatus,
    pub created_at: DateTime<Utc>,
}

/// Resource aggregate as staged inside a change record.
///
/// A `"resource"` change record carries one of these, JSON-serialized, in its
/// proposed value. Resources materialized from an approved bundle are trusted
/// by construction and inserted with status `approved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub resource_type: String,
    pub url: String,
    #[serde(default)]
    pub is_paid: bool,
}

impl ResourceDraft {
    /// Serialize for storage in a change record's proposed value
    pub fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse back from a change record's proposed value
    pub fn from_stored(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_stored_round_trip() {
        let draft = ResourceDraft {
            title: "The Rust Book".to_string(),
            description: "Official language book".to_string(),
            resource_type: "book".to_string(),
            url: "https://doc.rust-lang.org/book/".to_string(),
            is_paid: false,
        };
        let raw = draft.to_stored().unwrap();
        assert_eq!(ResourceDraft::from_stored(&raw).unwrap(), draft);
    }

    #[test]
    fn test_draft_defaults_optional_fields() {
        let draft: ResourceDraft = serde_json::from_str(
            r#"{"title":"t","resource_type":"video","url":"https://example.com"}"#,
        )
        .unwrap();
        assert_eq!(draft.description, "");
        assert!(!draft.is_paid);
    }
}
