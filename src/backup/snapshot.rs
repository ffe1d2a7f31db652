//! Snapshot codec: the versioned, flat backup payload
//!
//! A snapshot is a pure copy of the store at one instant. Entities become
//! flat records; the links evidence entries hold to people and contexts
//! become plain ID lists, so the payload never embeds one record inside
//! another and never needs forward references. Field names are camelCase
//! on the wire so payloads stay readable by the other Sam clients.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SamError, SamResult};
use crate::models::{
    Context, ContextId, ContextKind, Evidence, EvidenceId, EvidenceKind, Person, PersonId,
};
use crate::storage::Store;

/// The snapshot format version this build writes and the newest it reads.
/// Bump only when the payload shape changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The versioned envelope holding the whole store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Format version; readers must refuse snapshots newer than they understand
    pub version: u32,
    /// When the snapshot was taken (informational only)
    pub created_at: DateTime<Utc>,
    /// All people, flat
    pub people: Vec<PersonRecord>,
    /// All contexts, flat
    pub contexts: Vec<ContextRecord>,
    /// All evidence entries, flat, with relationships as ID lists
    pub evidence: Vec<EvidenceRecord>,
}

/// Flat copy of a [`Person`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub mention_count: u32,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonRecord {
    /// Flatten a live person into a record
    pub fn from_entity(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            roles: person.roles.clone(),
            mention_count: person.mention_count,
            notes: person.notes.clone(),
            alerts: person.alerts.clone(),
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }

    /// Rebuild the live person, keeping its original identity
    pub fn into_entity(self) -> Person {
        Person {
            id: self.id,
            name: self.name,
            roles: self.roles,
            mention_count: self.mention_count,
            notes: self.notes,
            alerts: self.alerts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Flat copy of a [`Context`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRecord {
    pub id: ContextId,
    pub name: String,
    #[serde(default)]
    pub kind: ContextKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub record_count: u32,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContextRecord {
    /// Flatten a live context into a record
    pub fn from_entity(context: &Context) -> Self {
        Self {
            id: context.id,
            name: context.name.clone(),
            kind: context.kind,
            tags: context.tags.clone(),
            record_count: context.record_count,
            notes: context.notes.clone(),
            alerts: context.alerts.clone(),
            created_at: context.created_at,
            updated_at: context.updated_at,
        }
    }

    /// Rebuild the live context, keeping its original identity
    pub fn into_entity(self) -> Context {
        Context {
            id: self.id,
            name: self.name,
            kind: self.kind,
            tags: self.tags,
            record_count: self.record_count,
            notes: self.notes,
            alerts: self.alerts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Flat copy of an [`Evidence`] entry
///
/// `linked_people` and `linked_contexts` are the only cross-record
/// references in the format; they are stored as ID lists and resolved
/// during restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRecord {
    pub id: EvidenceId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub kind: EvidenceKind,
    pub occurred_on: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub linked_people: Vec<PersonId>,
    #[serde(default)]
    pub linked_contexts: Vec<ContextId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EvidenceRecord {
    /// Flatten a live evidence entry into a record
    pub fn from_entity(evidence: &Evidence) -> Self {
        Self {
            id: evidence.id,
            title: evidence.title.clone(),
            body: evidence.body.clone(),
            kind: evidence.kind,
            occurred_on: evidence.occurred_on,
            tags: evidence.tags.clone(),
            linked_people: evidence.linked_people.clone(),
            linked_contexts: evidence.linked_contexts.clone(),
            created_at: evidence.created_at,
            updated_at: evidence.updated_at,
        }
    }

    /// Rebuild the live entry with its link lists left empty
    ///
    /// Links are attached in a second pass, once every entity they could
    /// point at exists in the store.
    pub fn to_bare_entity(&self) -> Evidence {
        Evidence {
            id: self.id,
            title: self.title.clone(),
            body: self.body.clone(),
            kind: self.kind,
            occurred_on: self.occurred_on,
            tags: self.tags.clone(),
            linked_people: Vec::new(),
            linked_contexts: Vec::new(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Probe type for reading the version field before anything else
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Flatten the current store state into a snapshot
///
/// Pure read: the store is not modified. Deterministic up to entity
/// ordering within each collection.
pub fn encode(store: &Store) -> SamResult<Snapshot> {
    let people = store
        .people
        .get_all()?
        .iter()
        .map(PersonRecord::from_entity)
        .collect();
    let contexts = store
        .contexts
        .get_all()?
        .iter()
        .map(ContextRecord::from_entity)
        .collect();
    let evidence = store
        .evidence
        .get_all()?
        .iter()
        .map(EvidenceRecord::from_entity)
        .collect();

    Ok(Snapshot {
        version: SNAPSHOT_VERSION,
        created_at: Utc::now(),
        people,
        contexts,
        evidence,
    })
}

/// Serialize a snapshot to its JSON byte form
pub fn serialize(snapshot: &Snapshot) -> SamResult<Vec<u8>> {
    serde_json::to_vec(snapshot).map_err(|e| SamError::SerializationFailed(e.to_string()))
}

/// Deserialize snapshot bytes, enforcing the version gate
///
/// The version field is probed first, so a payload written by a newer
/// release is refused before any of its (possibly reshaped) contents are
/// interpreted.
pub fn decode(bytes: &[u8]) -> SamResult<Snapshot> {
    let probe: VersionProbe = serde_json::from_slice(bytes)
        .map_err(|e| SamError::DeserializationFailed(e.to_string()))?;

    if probe.version > SNAPSHOT_VERSION {
        return Err(SamError::UnsupportedVersion {
            found: probe.version,
            supported: SNAPSHOT_VERSION,
        });
    }

    serde_json::from_slice(bytes).map_err(|e| SamError::DeserializationFailed(e.to_string()))
}
