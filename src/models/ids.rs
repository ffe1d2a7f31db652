//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs serialize as plain UUID strings, so a
//! restored entity keeps exactly the identity it was backed up with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
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

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping common prefixes
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(PersonId, "per-");
define_id!(ContextId, "ctx-");
define_id!(EvidenceId, "evi-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_creation() {
        let id = PersonId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ContextId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("ctx-"));
        assert_eq!(display.len(), 12); // "ctx-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = EvidenceId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = EvidenceId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = PersonId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Transparent serde: just the quoted UUID, no wrapper object
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));

        let deserialized: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = PersonId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_from_str_with_prefix() {
        let id = PersonId::new();
        let full = id.as_uuid().to_string();
        let parsed: PersonId = format!("per-{}", full).parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // This test documents that different ID types are distinct at compile time
        let person_id = PersonId::new();
        let context_id = ContextId::new();

        // These are different types - can't be compared directly
        // This would fail to compile:
        // assert_ne!(person_id, context_id);

        // But we can compare their underlying UUIDs if needed
        assert_ne!(person_id.as_uuid(), context_id.as_uuid());
    }
}
