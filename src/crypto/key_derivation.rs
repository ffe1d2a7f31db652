//! Key derivation using PBKDF2-HMAC-SHA-256
//!
//! Stretches a user password into an AES-256 key. The iteration count is
//! deliberately high so offline guessing stays expensive; callers should
//! keep derivation off latency-sensitive threads.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

/// Size of the PBKDF2 salt in bytes
pub const SALT_SIZE: usize = 16;

/// PBKDF2 iteration count. Fixed by the backup format; changing it breaks
/// decryption of existing backups.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Size of the derived AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// A derived encryption key
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same password and salt always produce the same key.
pub fn derive_key(password: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}

/// Generate a fresh random salt from the OS CSPRNG
pub fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_length() {
        let salt = generate_salt();
        let key = derive_key("test_passphrase", &salt);
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn test_same_password_same_salt_same_key() {
        let salt = generate_salt();
        let key1 = derive_key("test_passphrase", &salt);
        let key2 = derive_key("test_passphrase", &salt);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = generate_salt();
        let key1 = derive_key("passphrase1", &salt);
        let key2 = derive_key("passphrase2", &salt);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();
        let key1 = derive_key("same_passphrase", &salt1);
        let key2 = derive_key("same_passphrase", &salt2);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_salts_are_random() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
