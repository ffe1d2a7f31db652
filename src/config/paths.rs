//! Path management for the Sam core
//!
//! Provides XDG-compliant path resolution for the local data store.
//!
//! ## Path Resolution Order
//!
//! 1. `SAM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sam` or `~/.config/sam`
//! 3. Windows: `%APPDATA%\sam`

use std::path::PathBuf;

use crate::error::SamError;

/// Manages all paths used by the Sam data store
#[derive(Debug, Clone)]
pub struct SamPaths {
    /// Base directory for all Sam data
    base_dir: PathBuf,
}

impl SamPaths {
    /// Create a new SamPaths instance
    ///
    /// Path resolution:
    /// 1. `SAM_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/sam` or `~/.config/sam`
    /// 3. Windows: `%APPDATA%\sam`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SamError> {
        let base_dir = if let Ok(custom) = std::env::var("SAM_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SamPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/sam/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/sam/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to people.json
    pub fn people_file(&self) -> PathBuf {
        self.data_dir().join("people.json")
    }

    /// Get the path to contexts.json
    pub fn contexts_file(&self) -> PathBuf {
        self.data_dir().join("contexts.json")
    }

    /// Get the path to evidence.json
    pub fn evidence_file(&self) -> PathBuf {
        self.data_dir().join("evidence.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SamError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SamError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SamError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SamError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("sam"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SamError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SamError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sam"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SamPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SamPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SamPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.people_file(), paths.data_dir().join("people.json"));
        assert_eq!(paths.contexts_file(), paths.data_dir().join("contexts.json"));
        assert_eq!(paths.evidence_file(), paths.data_dir().join("evidence.json"));
    }
}
