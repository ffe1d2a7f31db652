//! Sam core - data models, local store, and encrypted backup engine
//!
//! This library is the core of Sam, a private assistant for documenting
//! workplace situations. It tracks the people involved, the organizational
//! contexts they belong to, and the evidence entries that link to both, and
//! it can export the whole store as a single password-protected file and
//! restore it with every cross-entity relationship intact.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (people, contexts, evidence)
//! - `storage`: JSON file storage layer
//! - `crypto`: Password-based authenticated encryption
//! - `backup`: Encrypted export and restore
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
//! let blob = backup::export_store(&store, "hunter2")?;
//! std::fs::write("my.sam-backup", &blob)?;
//! ```

pub mod backup;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{SamError, SamResult};
