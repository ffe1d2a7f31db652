//! Core data models for the Sam store
//!
//! This module contains the data structures that represent the documentation
//! domain: the people involved, the organizational contexts they belong to,
//! and the evidence entries that reference both.

pub mod context;
pub mod evidence;
pub mod ids;
pub mod person;

pub use context::{Context, ContextKind};
pub use evidence::{Evidence, EvidenceKind};
pub use ids::{ContextId, EvidenceId, PersonId};
pub use person::Person;
