//! Person model
//!
//! Represents a person who appears in the user's records: a colleague,
//! a manager, an HR contact, a witness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PersonId;

/// A person referenced by evidence entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Free-form role tags (e.g., "manager", "hr", "witness")
    #[serde(default)]
    pub roles: Vec<String>,

    /// How many evidence entries mention this person
    #[serde(default)]
    pub mention_count: u32,

    /// Free-form notes about this person
    #[serde(default)]
    pub notes: Vec<String>,

    /// Alerts raised against this person (e.g., a repeated-behavior flag)
    #[serde(default)]
    pub alerts: Vec<String>,

    /// When the person was first recorded
    pub created_at: DateTime<Utc>,

    /// When the person was last modified
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a new person
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PersonId::new(),
            name: name.into(),
            roles: Vec::new(),
            mention_count: 0,
            notes: Vec::new(),
            alerts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new person with role tags
    pub fn with_roles(name: impl Into<String>, roles: Vec<String>) -> Self {
        let mut person = Self::new(name);
        person.roles = roles;
        person
    }

    /// Add a role tag if not already present
    pub fn add_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        if !self.roles.contains(&role) {
            self.roles.push(role);
            self.touch();
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

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
