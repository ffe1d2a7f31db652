//! Context repository for JSON storage
//!
//! Manages loading and saving organizational contexts to contexts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SamError;
use crate::models::{Context, ContextId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable context data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContextData {
    contexts: Vec<Context>,
}

/// Repository for context persistence
pub struct ContextRepository {
    path: PathBuf,
    data: RwLock<HashMap<ContextId, Context>>,
}

impl ContextRepository {
    /// Create a new context repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load contexts from disk
    pub fn load(&self) -> Result<(), SamError> {
        let file_data: ContextData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for context in file_data.contexts {
            data.insert(context.id, context);
        }

        Ok(())
    }

    /// Save contexts to disk
    pub fn save(&self) -> Result<(), SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut contexts: Vec<_> = data.values().cloned().collect();
        contexts.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));

        let file_data = ContextData { contexts };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a context by ID
    pub fn get(&self, id: ContextId) -> Result<Option<Context>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all contexts, sorted by name
    pub fn get_all(&self) -> Result<Vec<Context>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut contexts: Vec<_> = data.values().cloned().collect();
        contexts.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(contexts)
    }

    /// Insert or replace a context, keyed by its ID
    pub fn insert(&self, context: Context) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(context.id, context);
        Ok(())
    }

    /// Delete all contexts
    pub fn delete_all(&self) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    /// Number of contexts in the repository
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
