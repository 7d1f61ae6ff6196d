//! Strongly-typed ID wrapper for transactions
//!
//! Using a newtype wrapper prevents accidentally mixing transaction IDs with
//! other strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Minimum number of hex characters required for prefix matching
    const MIN_PREFIX_LEN: usize = 4;

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether a user-supplied identifier refers to this ID.
    ///
    /// Accepts the full UUID or a hex prefix of at least four characters,
    /// with or without the `txn-` display prefix.
    pub fn matches(&self, identifier: &str) -> bool {
        let bare = identifier.strip_prefix("txn-").unwrap_or(identifier);
        if bare.len() < Self::MIN_PREFIX_LEN {
            return false;
        }
        let full = self.0.to_string();
        full.starts_with(&bare.to_lowercase())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", &self.0.to_string()[..8])
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Try to parse the full UUID
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self(uuid));
        }
        // Try stripping the display prefix
        let s = s.strip_prefix("txn-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = TransactionId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12); // "txn-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = TransactionId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = TransactionId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = TransactionId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_from_str_with_prefix() {
        let id = TransactionId::new();
        let full = id.as_uuid().to_string();
        let parsed: TransactionId = format!("txn-{}", full).parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_matches_full_uuid() {
        let id = TransactionId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("550e8400"));
        assert!(id.matches("txn-550e8400"));
        assert!(id.matches("550E8400"));
    }

    #[test]
    fn test_matches_rejects_short_prefix() {
        let id = TransactionId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(!id.matches("550"));
        assert!(!id.matches(""));
        assert!(!id.matches("txn-"));
    }

    #[test]
    fn test_matches_rejects_other_id() {
        let id = TransactionId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(!id.matches("660e8400"));
    }
}
