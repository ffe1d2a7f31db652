//! Configuration module for the Sam core
//!
//! Provides platform-aware path resolution for the data directory and the
//! per-collection storage files.

pub mod paths;

pub use paths::SamPaths;
