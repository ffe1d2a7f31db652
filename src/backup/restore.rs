//! Restore orchestration: snapshot back into the live store
//!
//! Relationships in a snapshot reference across collections, so no entity
//! may be linked before everything it could point at exists. Restore
//! therefore runs in two passes: recreate every entity bare, then resolve
//! and attach links. IDs are carried over verbatim; restore never mints
//! new identities.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::SamResult;
use crate::models::{ContextId, PersonId};
use crate::storage::Store;

use super::snapshot::Snapshot;

/// Replace the store's contents with a snapshot
///
/// 1. Wipe all three collections, most-dependent first (evidence, then
///    contexts, then people).
/// 2. Recreate every entity with its scalar fields and original ID,
///    link lists empty.
/// 3. Relink: resolve each evidence entry's ID lists against the newly
///    inserted people and contexts, silently dropping IDs that resolve
///    to nothing.
/// 4. Commit everything to disk.
///
/// The wipe-then-recreate sequence runs against the in-memory
/// repositories; nothing touches disk until the final commit, so a
/// failure before that point leaves the on-disk store as it was. Callers
/// must keep other writers away from the store for the duration.
pub fn apply(snapshot: &Snapshot, store: &Store) -> SamResult<RestoreSummary> {
    // Wipe, most-dependent collection first
    store.evidence.delete_all()?;
    store.contexts.delete_all()?;
    store.people.delete_all()?;

    // Pass 1: bare entities, original IDs, no links
    for record in &snapshot.people {
        store.people.insert(record.clone().into_entity())?;
    }
    for record in &snapshot.contexts {
        store.contexts.insert(record.clone().into_entity())?;
    }
    for record in &snapshot.evidence {
        store.evidence.insert(record.to_bare_entity())?;
    }

    // Pass 2: resolve links against what was just inserted
    let known_people: HashSet<PersonId> =
        store.people.get_all()?.iter().map(|p| p.id).collect();
    let known_contexts: HashSet<ContextId> =
        store.contexts.get_all()?.iter().map(|c| c.id).collect();

    let mut links_dropped = 0;

    for record in &snapshot.evidence {
        let mut entity = record.to_bare_entity();

        for person_id in &record.linked_people {
            if known_people.contains(person_id) {
                if !entity.linked_people.contains(person_id) {
                    entity.linked_people.push(*person_id);
                }
            } else {
                links_dropped += 1;
            }
        }
        for context_id in &record.linked_contexts {
            if known_contexts.contains(context_id) {
                if !entity.linked_contexts.contains(context_id) {
                    entity.linked_contexts.push(*context_id);
                }
            } else {
                links_dropped += 1;
            }
        }

        store.evidence.insert(entity)?;
    }

    // Commit
    store.save_all()?;

    Ok(RestoreSummary {
        people_restored: snapshot.people.len(),
        contexts_restored: snapshot.contexts.len(),
        evidence_restored: snapshot.evidence.len(),
        links_dropped,
        backup_date: snapshot.created_at,
    })
}

/// Result of a restore operation
#[derive(Debug, Clone)]
pub struct RestoreSummary {
    /// How many people were recreated
    pub people_restored: usize,
    /// How many contexts were recreated
    pub contexts_restored: usize,
    /// How many evidence entries were recreated
    pub evidence_restored: usize,
    /// How many links referenced an ID absent from the snapshot and were dropped
    pub links_dropped: usize,
    /// When the backup was created
    pub backup_date: DateTime<Utc>,
}

impl RestoreSummary {
    /// Get a one-line summary of what was restored
    pub fn summary(&self) -> String {
        let base = format!(
            "Restored {} people, {} contexts, {} evidence entries",
            self.people_restored, self.contexts_restored, self.evidence_restored
        );
        if self.links_dropped > 0 {
            format!("{} ({} unresolvable links dropped)", base, self.links_dropped)
        } else {
            base
        }
    }
}
