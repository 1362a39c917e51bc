//! Database-assigned row identifier
//!
//! Ids come from `BIGSERIAL` columns, so they are only ever produced by the
//! store (`INSERT ... RETURNING id`). The newtype keeps skill ids, user ids
//! and change ids from being mixed up with arbitrary integers in signatures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 64-bit database-assigned identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    /// Create an Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Id).map_err(|_| IdParseError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = Id::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<Id>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("abc".parse::<Id>(), Err(IdParseError::InvalidFormat));
        assert_eq!("".parse::<Id>(), Err(IdParseError::InvalidFormat));
    }

    #[test]
    fn test_serde_transparent() {
        let id = Id::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: Id = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
