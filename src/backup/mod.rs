//! Encrypted backup and restore for the Sam store
//!
//! Exports the entire store as a single password-protected file and
//! restores it atomically, preserving every cross-entity relationship by
//! stable identity.
//!
//! # Architecture
//!
//! The backup system consists of three components, composed by the
//! service layer:
//!
//! - `snapshot`: converts the live store into a versioned, flat record
//!   graph and back, representing relationships as ID lists
//! - `restore`: replaces the store's contents from a snapshot in two
//!   passes (entities first, links second)
//! - `service`: the caller-facing export/import entry points, wiring the
//!   codec to the crypto engine
//!
//! # Backup Format
//!
//! The decrypted payload is a JSON document with camelCase field names:
//! - `version`: format version; readers refuse anything newer than they
//!   understand
//! - `createdAt`: when the backup was created (informational)
//! - `people`, `contexts`, `evidence`: flat arrays of records; evidence
//!   records carry `linkedPeople`/`linkedContexts` ID lists
//!
//! The payload is encrypted with AES-256-GCM under a PBKDF2-derived key
//! and written as `salt ‖ nonce ‖ ciphertext ‖ tag` (see [`crate::crypto`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use sam_core::backup;
//! use sam_core::config::SamPaths;
//! use sam_core::storage::Store;
//!
//! let store = Store::new(SamPaths::new()?)?;
//! store.load_all()?;
//!
//! // Export
//! let blob = backup::export_store(&store, "hunter2")?;
//! std::fs::write("my.sam-backup", &blob)?;
//!
//! // Later, restore
//! let blob = std::fs::read("my.sam-backup")?;
//! let summary = backup::import_blob(&blob, "hunter2", &store)?;
//! println!("{}", summary.summary());
//! ```

pub mod restore;
pub mod service;
pub mod snapshot;

pub use restore::{apply, RestoreSummary};
pub use service::{
    export_store, export_to_file, import_blob, import_from_file, BACKUP_FILE_EXTENSION,
};
pub use snapshot::{
    ContextRecord, EvidenceRecord, PersonRecord, Snapshot, SNAPSHOT_VERSION,
};
