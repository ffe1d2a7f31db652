//! Evidence repository for JSON storage
//!
//! Manages loading and saving evidence entries to evidence.json, with
//! secondary indexes for looking up entries by linked person or context.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SamError;
use crate::models::{ContextId, Evidence, EvidenceId, PersonId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable evidence data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EvidenceData {
    evidence: Vec<Evidence>,
}

/// Repository for evidence persistence with indexing
pub struct EvidenceRepository {
    path: PathBuf,
    data: RwLock<HashMap<EvidenceId, Evidence>>,
    /// Index: person_id -> evidence_ids
    by_person: RwLock<HashMap<PersonId, Vec<EvidenceId>>>,
    /// Index: context_id -> evidence_ids
    by_context: RwLock<HashMap<ContextId, Vec<EvidenceId>>>,
}

impl EvidenceRepository {
    /// Create a new evidence repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_person: RwLock::new(HashMap::new()),
            by_context: RwLock::new(HashMap::new()),
        }
    }

    /// Load evidence from disk and rebuild indexes
    pub fn load(&self) -> Result<(), SamError> {
        let file_data: EvidenceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_person = self
            .by_person
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_context = self
            .by_context
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_person.clear();
        by_context.clear();

        for entry in file_data.evidence {
            let id = entry.id;

            for person_id in &entry.linked_people {
                by_person.entry(*person_id).or_default().push(id);
            }
            for context_id in &entry.linked_contexts {
                by_context.entry(*context_id).or_default().push(id);
            }

            data.insert(id, entry);
        }

        Ok(())
    }

    /// Save evidence to disk
    pub fn save(&self) -> Result<(), SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut evidence: Vec<_> = data.values().cloned().collect();
        evidence.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let file_data = EvidenceData { evidence };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an evidence entry by ID
    pub fn get(&self, id: EvidenceId) -> Result<Option<Evidence>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all evidence entries, newest first
    pub fn get_all(&self) -> Result<Vec<Evidence>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut evidence: Vec<_> = data.values().cloned().collect();
        evidence.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(evidence)
    }

    /// Get evidence entries linked to a person, newest first
    pub fn get_by_person(&self, person_id: PersonId) -> Result<Vec<Evidence>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_person = self
            .by_person
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_person
            .get(&person_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut evidence: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        evidence.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(evidence)
    }

    /// Get evidence entries linked to a context, newest first
    pub fn get_by_context(&self, context_id: ContextId) -> Result<Vec<Evidence>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_context = self
            .by_context
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_context
            .get(&context_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut evidence: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        evidence.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(evidence)
    }

    /// Insert or replace an evidence entry, keyed by its ID
    pub fn insert(&self, entry: Evidence) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_person = self
            .by_person
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_context = self
            .by_context
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = entry.id;

        // Drop index entries for the previous version, if any
        if let Some(old) = data.remove(&id) {
            for person_id in &old.linked_people {
                if let Some(ids) = by_person.get_mut(person_id) {
                    ids.retain(|e| *e != id);
                }
            }
            for context_id in &old.linked_contexts {
                if let Some(ids) = by_context.get_mut(context_id) {
                    ids.retain(|e| *e != id);
                }
            }
        }

        for person_id in &entry.linked_people {
            by_person.entry(*person_id).or_default().push(id);
        }
        for context_id in &entry.linked_contexts {
            by_context.entry(*context_id).or_default().push(id);
        }

        data.insert(id, entry);
        Ok(())
    }

    /// Delete all evidence entries and indexes
    pub fn delete_all(&self) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_person = self
            .by_person
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_context = self
            .by_context
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_person.clear();
        by_context.clear();
        Ok(())
    }

    /// Number of evidence entries in the repository
    pub fn len(&self) -> Result<usize, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    /// Check if the repository is empty
    pub fn is_empty(&self) -> Result<bool, SamError> {
        Ok(self.len()? == 0)
    }
}
