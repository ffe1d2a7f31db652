//! Evidence model
//!
//! Represents one documented incident or artifact. Evidence entries are the
//! only entities that reference other entities: each carries the IDs of the
//! people and contexts it involves.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ContextId, EvidenceId, PersonId};

/// Kind of evidence artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    /// A written account of an incident
    #[default]
    Note,
    /// An email
    Email,
    /// A chat message or thread
    Message,
    /// A file or document
    Document,
    /// Notes from a meeting or conversation
    Meeting,
    /// Anything else
    Other,
}

impl EvidenceKind {
    /// Parse an evidence kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "note" => Some(Self::Note),
            "email" => Some(Self::Email),
            "message" | "chat" => Some(Self::Message),
            "document" | "file" => Some(Self::Document),
            "meeting" | "conversation" => Some(Self::Meeting),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "Note"),
            Self::Email => write!(f, "Email"),
            Self::Message => write!(f, "Message"),
            Self::Document => write!(f, "Document"),
            Self::Meeting => write!(f, "Meeting"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A documented piece of evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    /// Unique identifier
    pub id: EvidenceId,

    /// Short title
    pub title: String,

    /// Full account or transcript
    #[serde(default)]
    pub body: String,

    /// What kind of artifact this is
    #[serde(rename = "type", default)]
    pub kind: EvidenceKind,

    /// The date the incident occurred, if known
    pub occurred_on: Option<NaiveDate>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// People involved, by ID. Set semantics: no duplicates.
    #[serde(default)]
    pub linked_people: Vec<PersonId>,

    /// Contexts involved, by ID. Set semantics: no duplicates.
    #[serde(default)]
    pub linked_contexts: Vec<ContextId>,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl Evidence {
    /// Create a new evidence entry
    pub fn new(title: impl Into<String>, kind: EvidenceKind) -> Self {
        let now = Utc::now();
        Self {
            id: EvidenceId::new(),
            title: title.into(),
            body: String::new(),
            kind,
            occurred_on: None,
            tags: Vec::new(),
            linked_people: Vec::new(),
            linked_contexts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new evidence entry with a body
    pub fn with_body(
        title: impl Into<String>,
        kind: EvidenceKind,
        body: impl Into<String>,
    ) -> Self {
        let mut evidence = Self::new(title, kind);
        evidence.body = body.into();
        evidence
    }

    /// Link a person to this entry. Linking twice is a no-op.
    pub fn link_person(&mut self, person_id: PersonId) {
        if !self.linked_people.contains(&person_id) {
            self.linked_people.push(person_id);
            self.touch();
        }
    }

    /// Link a context to this entry. Linking twice is a no-op.
    pub fn link_context(&mut self, context_id: ContextId) {
        if !self.linked_contexts.contains(&context_id) {
            self.linked_contexts.push(context_id);
            self.touch();
        }
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_evidence_defaults() {
        let evidence = Evidence::new("1:1 with manager", EvidenceKind::Meeting);
        assert_eq!(evidence.title, "1:1 with manager");
        assert!(evidence.body.is_empty());
        assert!(evidence.occurred_on.is_none());
        assert!(evidence.linked_people.is_empty());
        assert!(evidence.linked_contexts.is_empty());
    }

    #[test]
    fn test_link_person_deduplicates() {
        let mut evidence = Evidence::new("Email thread", EvidenceKind::Email);
        let person_id = PersonId::new();

        evidence.link_person(person_id);
        evidence.link_person(person_id);

        assert_eq!(evidence.linked_people, vec![person_id]);
    }

    #[test]
    fn test_link_context_deduplicates() {
        let mut evidence = Evidence::new("Email thread", EvidenceKind::Email);
        let context_id = ContextId::new();

        evidence.link_context(context_id);
        evidence.link_context(context_id);

        assert_eq!(evidence.linked_contexts, vec![context_id]);
    }

    #[test]
    fn test_serde_round_trip_preserves_links() {
        let mut evidence = Evidence::with_body("Slack log", EvidenceKind::Message, "...");
        let person_id = PersonId::new();
        let context_id = ContextId::new();
        evidence.link_person(person_id);
        evidence.link_context(context_id);

        let json = serde_json::to_string(&evidence).unwrap();
        let back: Evidence = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, evidence.id);
        assert_eq!(back.linked_people, vec![person_id]);
        assert_eq!(back.linked_contexts, vec![context_id]);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(EvidenceKind::parse("email"), Some(EvidenceKind::Email));
        assert_eq!(EvidenceKind::parse("Chat"), Some(EvidenceKind::Message));
        assert_eq!(EvidenceKind::parse("nonsense"), None);
    }
}
