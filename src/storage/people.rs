//! Person repository for JSON storage
//!
//! Manages loading and saving people to people.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SamError;
use crate::models::{Person, PersonId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable people data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PeopleData {
    people: Vec<Person>,
}

/// Repository for person persistence
pub struct PersonRepository {
    path: PathBuf,
    data: RwLock<HashMap<PersonId, Person>>,
}

impl PersonRepository {
    /// Create a new person repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load people from disk
    pub fn load(&self) -> Result<(), SamError> {
        let file_data: PeopleData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for person in file_data.people {
            data.insert(person.id, person);
        }

        Ok(())
    }

    /// Save people to disk
    pub fn save(&self) -> Result<(), SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut people: Vec<_> = data.values().cloned().collect();
        people.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));

        let file_data = PeopleData { people };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a person by ID
    pub fn get(&self, id: PersonId) -> Result<Option<Person>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all people, sorted by name
    pub fn get_all(&self) -> Result<Vec<Person>, SamError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut people: Vec<_> = data.values().cloned().collect();
        people.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(people)
    }

    /// Insert or replace a person, keyed by its ID
    pub fn insert(&self, person: Person) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(person.id, person);
        Ok(())
    }

    /// Delete all people
    pub fn delete_all(&self) -> Result<(), SamError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    /// Number of people in the repository
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
