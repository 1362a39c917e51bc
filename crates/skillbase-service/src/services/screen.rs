//! Content screener implementation
//!
//! The default screener is a case-insensitive blocked-term substring match
//! over a configured term list. The `ContentScreener` trait seam lets an
//! external moderation service replace it without touching the services.

use async_trait::async_trait;

use skillbase_core::traits::{ContentScreener, RepoResult};

/// Blocked-term list screener
#[derive(Debug, Clone, Default)]
pub struct TermListScreener {
    // lowercased at construction; scan lowercases the input once
    terms: Vec<String>,
}

impl TermListScreener {
    /// Create a screener from a blocked-term list
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[async_trait]
impl ContentScreener for TermListScreener {
    async fn scan(&self, text: &str) -> RepoResult<bool> {
        let lowered = text.to_lowercase();
        Ok(self.terms.iter().any(|term| lowered.contains(term)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flags_blocked_terms_case_insensitively() {
        let screener = TermListScreener::new(["spam", "scam"]);
        assert!(screener.scan("Totally not a SPAM offer").await.unwrap());
        assert!(screener.scan("scammy").await.unwrap());
        assert!(!screener.scan("a perfectly fine description").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_list_passes_everything() {
        let screener = TermListScreener::new(Vec::<String>::new());
        assert!(!screener.scan("anything at all").await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_terms_are_dropped() {
        // An empty term would match every input
        let screener = TermListScreener::new(["", "spam"]);
        assert!(!screener.scan("clean text").await.unwrap());
        assert!(screener.scan("spam").await.unwrap());
    }
}
