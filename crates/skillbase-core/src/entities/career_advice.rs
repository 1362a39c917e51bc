//! Career advice entity - a curated career-advice article

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Id;

/// Publication status of a career-advice article.
/// New articles created through an approved bundle start as drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceStatus {
    Draft,
    Published,
}

impl AdviceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for AdviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Career advice entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerAdvice {
    pub id: Id,
    pub title: String,
    pub industry: String,
    pub career_stage: String,
    pub content: String,
    pub status: AdviceStatus,
    pub author_id: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CareerAdvice {
    /// Whether the article is visible to readers
    #[inline]
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == AdviceStatus::Published
    }
}
