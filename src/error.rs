//! Custom error types for the Sam core
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Sam core operations
#[derive(Error, Debug)]
pub enum SamError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage layer errors (repository files, locks)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal cipher failures (distinct from authentication failures)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Backup blob is too short or structurally unparsable before decryption
    #[error("Backup file is invalid or truncated")]
    InvalidFile,

    /// GCM authentication failed: wrong password or tampered/corrupted data.
    /// The two causes are cryptographically indistinguishable.
    #[error("Wrong password or corrupted backup file")]
    WrongPassword,

    /// Decrypted bytes are not a valid snapshot encoding
    #[error("Backup payload could not be decoded: {0}")]
    DeserializationFailed(String),

    /// Snapshot was written by a newer release than this build understands
    #[error("Backup version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot could not be encoded to bytes
    #[error("Failed to encode backup payload: {0}")]
    SerializationFailed(String),
}

impl SamError {
    /// Check if this error means the password was wrong (or the blob tampered)
    pub fn is_wrong_password(&self) -> bool {
        matches!(self, Self::WrongPassword)
    }

    /// Check if this is a version-gate rejection
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }
}

impl From<std::io::Error> for SamError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Sam core operations
pub type SamResult<T> = Result<T, SamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SamError::Storage("test error".into());
        assert_eq!(err.to_string(), "Storage error: test error");
    }

    #[test]
    fn test_wrong_password_display_is_generic() {
        // Wrong password and tampering must be reported identically,
        // with no hint that would let callers tell them apart.
        let err = SamError::WrongPassword;
        assert_eq!(err.to_string(), "Wrong password or corrupted backup file");
        assert!(err.is_wrong_password());
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = SamError::UnsupportedVersion {
            found: 3,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "Backup version 3 is newer than the supported version 1"
        );
        assert!(err.is_unsupported_version());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sam_err: SamError = io_err.into();
        assert!(matches!(sam_err, SamError::Io(_)));
    }
}
