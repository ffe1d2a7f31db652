//! Storage layer for the Sam store
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each entity collection lives in its own file behind a
//! repository; the `Store` coordinator owns all three.

pub mod contexts;
pub mod evidence;
pub mod file_io;
pub mod people;

pub use contexts::ContextRepository;
pub use evidence::EvidenceRepository;
pub use file_io::{read_json, write_json_atomic};
pub use people::PersonRepository;

use crate::config::paths::SamPaths;
use crate::error::SamError;

/// Main storage coordinator that provides access to all repositories
///
/// This is the persistence surface the backup engine works against:
/// each repository exposes fetch-all, insert, and delete-all.
pub struct Store {
    paths: SamPaths,
    pub people: PersonRepository,
    pub contexts: ContextRepository,
    pub evidence: EvidenceRepository,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: SamPaths) -> Result<Self, SamError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            people: PersonRepository::new(paths.people_file()),
            contexts: ContextRepository::new(paths.contexts_file()),
            evidence: EvidenceRepository::new(paths.evidence_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SamPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&self) -> Result<(), SamError> {
        self.people.load()?;
        self.contexts.load()?;
        self.evidence.load()?;
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), SamError> {
        self.people.save()?;
        self.contexts.save()?;
        self.evidence.save()?;
        Ok(())
    }

    /// Check whether every collection is empty
    pub fn is_empty(&self) -> Result<bool, SamError> {
        Ok(self.people.is_empty()?
            && self.contexts.is_empty()?
            && self.evidence.is_empty()?)
    }
}
