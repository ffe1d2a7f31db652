//! Organizational context model
//!
//! Represents the setting an evidence entry happened in: a workplace,
//! a team, a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ContextId;

/// Kind of organizational context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    /// A whole workplace or employer
    #[default]
    Workplace,
    /// A team within a workplace
    Team,
    /// A project or engagement
    Project,
    /// Anything else
    Other,
}

impl ContextKind {
    /// Parse a context kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "workplace" | "employer" | "company" => Some(Self::Workplace),
            "team" => Some(Self::Team),
            "project" => Some(Self::Project),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workplace => write!(f, "Workplace"),
            Self::Team => write!(f, "Team"),
            Self::Project => write!(f, "Project"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// An organizational context evidence entries can reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Unique identifier
    pub id: ContextId,

    /// Display name (e.g., "Acme Corp", "Platform Team")
    pub name: String,

    /// What kind of context this is
    #[serde(rename = "type")]
    pub kind: ContextKind,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// How many evidence entries reference this context
    #[serde(default)]
    pub record_count: u32,

    /// Free-form notes about this context
    #[serde(default)]
    pub notes: Vec<String>,

    /// Alerts raised against this context
    #[serde(default)]
    pub alerts: Vec<String>,

    /// When the context was first recorded
    pub created_at: DateTime<Utc>,

    /// When the context was last modified
    pub updated_at: DateTime<Utc>,
}

impl Context {
    /// Create a new context
    pub fn new(name: impl Into<String>, kind: ContextKind) -> Self {
        let now = Utc::now();
        Self {
            id: ContextId::new(),
            name: name.into(),
            kind,
            tags: Vec::new(),
            record_count: 0,
            notes: Vec::new(),
            alerts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a note
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
        self.touch();
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.kind)
    }
}
