//! Backup service: the caller-facing export/import entry points
//!
//! Composes the snapshot codec, the crypto engine, and the restore
//! orchestrator. This is the only surface the surrounding application
//! talks to. The password is borrowed for the duration of each call and
//! never stored or logged.

use std::fs;
use std::path::Path;

use crate::crypto;
use crate::error::{SamError, SamResult};
use crate::storage::Store;

use super::restore::{self, RestoreSummary};
use super::snapshot;

/// Suggested extension for backup files
pub const BACKUP_FILE_EXTENSION: &str = "sam-backup";

/// Export the whole store as an encrypted blob
///
/// The store is only read; a failed export leaves it untouched.
pub fn export_store(store: &Store, password: &str) -> SamResult<Vec<u8>> {
    let snapshot = snapshot::encode(store)?;
    let payload = snapshot::serialize(&snapshot)?;
    crypto::encrypt(&payload, password)
}

/// Decrypt a blob and replace the store's contents with it
///
/// Decryption, decoding, and the version gate all run before the store is
/// touched, so a wrong password, a tampered file, or a too-new backup
/// leaves the current data exactly as it was.
pub fn import_blob(blob: &[u8], password: &str, store: &Store) -> SamResult<RestoreSummary> {
    let payload = crypto::decrypt(blob, password)?;
    let snapshot = snapshot::decode(&payload)?;
    restore::apply(&snapshot, store)
}

/// Export the store to a backup file
pub fn export_to_file(store: &Store, password: &str, path: &Path) -> SamResult<()> {
    let blob = export_store(store, password)?;
    fs::write(path, blob)
        .map_err(|e| SamError::Io(format!("Failed to write backup file: {}", e)))?;
    Ok(())
}

/// Import a backup file into the store
pub fn import_from_file(path: &Path, password: &str, store: &Store) -> SamResult<RestoreSummary> {
    let blob = fs::read(path)
        .map_err(|e| SamError::Io(format!("Failed to read backup file: {}", e)))?;
    import_blob(&blob, password, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamPaths;
    use crate::crypto::SecureString;
    use crate::models::{Context, ContextKind, Evidence, EvidenceKind, Person};
    use tempfile::TempDir;

    fn test_store() -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SamPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Store::new(paths).unwrap(), temp_dir)
    }

    fn populated_store() -> (Store, TempDir) {
        let (store, temp) = test_store();

        let person = Person::with_roles("Alex Reyes", vec!["manager".into()]);
        let context = Context::new("Acme Corp", ContextKind::Workplace);
        let mut entry =
            Evidence::with_body("Email thread", EvidenceKind::Email, "Forwarded messages");
        entry.link_person(person.id);
        entry.link_context(context.id);

        store.people.insert(person).unwrap();
        store.contexts.insert(context).unwrap();
        store.evidence.insert(entry).unwrap();

        (store, temp)
    }

    #[test]
    fn test_export_import_full_cycle() {
        let (source, _t1) = populated_store();
        let person_id = source.people.get_all().unwrap()[0].id;
        let context_id = source.contexts.get_all().unwrap()[0].id;

        let blob = export_store(&source, "hunter2").unwrap();

        let (target, _t2) = test_store();
        let summary = import_blob(&blob, "hunter2", &target).unwrap();

        assert_eq!(summary.people_restored, 1);
        assert_eq!(summary.evidence_restored, 1);

        // Identity preserved end to end
        let person = target.people.get(person_id).unwrap().unwrap();
        assert_eq!(person.name, "Alex Reyes");

        let evidence = target.evidence.get_all().unwrap();
        assert_eq!(evidence[0].linked_people, vec![person_id]);
        assert_eq!(evidence[0].linked_contexts, vec![context_id]);
    }

    #[test]
    fn test_blob_is_opaque() {
        let (store, _temp) = populated_store();
        let blob = export_store(&store, "hunter2").unwrap();

        // Nothing legible leaks into the ciphertext
        let haystack = String::from_utf8_lossy(&blob);
        assert!(!haystack.contains("Alex"));
        assert!(!haystack.contains("Acme"));
        assert!(!haystack.contains("version"));
    }

    #[test]
    fn test_two_exports_differ() {
        let (store, _temp) = populated_store();
        let blob1 = export_store(&store, "hunter2").unwrap();
        let blob2 = export_store(&store, "hunter2").unwrap();
        assert_ne!(blob1, blob2);
    }

    #[test]
    fn test_wrong_password_rejected_and_store_untouched() {
        let (source, _t1) = populated_store();
        let blob = export_store(&source, "hunter2").unwrap();

        let (target, _t2) = test_store();
        target.people.insert(Person::new("Existing")).unwrap();

        let result = import_blob(&blob, "wrong", &target);
        assert!(matches!(result, Err(SamError::WrongPassword)));

        // Current data survives a failed import
        assert_eq!(target.people.len().unwrap(), 1);
        assert_eq!(target.people.get_all().unwrap()[0].name, "Existing");
    }

    #[test]
    fn test_tampered_blob_rejected() {
        let (source, _t1) = populated_store();
        let mut blob = export_store(&source, "hunter2").unwrap();
        let mid = blob.len() / 2;
        blob[mid] ^= 0x01;

        let (target, _t2) = test_store();
        let result = import_blob(&blob, "hunter2", &target);
        assert!(matches!(result, Err(SamError::WrongPassword)));
    }

    #[test]
    fn test_truncated_blob_is_invalid_file() {
        let (target, _temp) = test_store();
        let result = import_blob(&[0u8; 20], "hunter2", &target);
        assert!(matches!(result, Err(SamError::InvalidFile)));
    }

    #[test]
    fn test_future_version_rejected_without_mutating_store() {
        // Forge a valid encryption of a payload from a "newer" release
        let payload = br#"{"version":99,"createdAt":"2030-01-01T00:00:00Z","people":[],"contexts":[],"evidence":[]}"#;
        let blob = crypto::encrypt(payload, "hunter2").unwrap();

        let (target, _temp) = test_store();
        target.people.insert(Person::new("Existing")).unwrap();

        let result = import_blob(&blob, "hunter2", &target);
        assert!(matches!(
            result,
            Err(SamError::UnsupportedVersion { found: 99, .. })
        ));

        assert_eq!(target.people.len().unwrap(), 1);
    }

    #[test]
    fn test_garbage_payload_is_deserialization_failure() {
        // Correct password, valid encryption, nonsense payload
        let blob = crypto::encrypt(b"not a snapshot", "hunter2").unwrap();

        let (target, _temp) = test_store();
        let result = import_blob(&blob, "hunter2", &target);
        assert!(matches!(result, Err(SamError::DeserializationFailed(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let (source, _t1) = populated_store();
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join(format!("export.{}", BACKUP_FILE_EXTENSION));

        export_to_file(&source, "hunter2", &path).unwrap();
        assert!(path.exists());

        let (target, _t2) = test_store();
        let summary = import_from_file(&path, "hunter2", &target).unwrap();
        assert_eq!(summary.people_restored, 1);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let (target, _temp) = test_store();
        let result = import_from_file(Path::new("/nonexistent/x.sam-backup"), "pw", &target);
        assert!(matches!(result, Err(SamError::Io(_))));
    }

    #[test]
    fn test_password_can_be_held_in_secure_string() {
        let (source, _t1) = populated_store();
        let password = SecureString::new("hunter2");

        let blob = export_store(&source, &password).unwrap();

        let (target, _t2) = test_store();
        import_blob(&blob, &password, &target).unwrap();
        assert_eq!(target.people.len().unwrap(), 1);
    }

    #[test]
    fn test_empty_store_round_trips() {
        let (source, _t1) = test_store();
        let blob = export_store(&source, "pw").unwrap();

        let (target, _t2) = test_store();
        target.people.insert(Person::new("Old")).unwrap();

        let summary = import_blob(&blob, "pw", &target).unwrap();
        assert_eq!(summary.people_restored, 0);
        assert!(target.is_empty().unwrap());
    }
}
