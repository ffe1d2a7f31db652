//! AES-256-GCM encryption/decryption of backup blobs
//!
//! Each encryption draws a fresh salt and nonce, so encrypting the same
//! plaintext twice yields different blobs. The blob layout is
//! `salt(16) ‖ nonce(12) ‖ ciphertext ‖ tag(16)` with no length prefixes;
//! every field is fixed-size except the ciphertext, which trails to the
//! tag at the end of the buffer. Salt and nonce are stored in the clear:
//! GCM nonces must be unique, not secret, and PBKDF2 salts are public.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::error::{SamError, SamResult};

use super::key_derivation::{derive_key, generate_salt, SALT_SIZE};

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes
const TAG_SIZE: usize = 16;

/// Fixed overhead a blob carries beyond the plaintext: salt + nonce + tag
pub const BLOB_OVERHEAD: usize = SALT_SIZE + NONCE_SIZE + TAG_SIZE;

/// Encrypt plaintext under a password
///
/// Draws a fresh random salt and nonce for every call. The returned blob is
/// exactly `BLOB_OVERHEAD` bytes larger than the plaintext.
pub fn encrypt(plaintext: &[u8], password: &str) -> SamResult<Vec<u8>> {
    let salt = generate_salt();
    let key = derive_key(password, &salt);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SamError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    // The aes-gcm crate appends the 16-byte tag to the ciphertext, which is
    // exactly the `ciphertext ‖ tag` tail of the wire format.
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| SamError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);

    Ok(blob)
}

/// Decrypt a blob with a password
///
/// Fails with `InvalidFile` if the blob is shorter than the fixed overhead,
/// and with `WrongPassword` if GCM authentication fails. An incorrect
/// password and a tampered blob are indistinguishable and report the same
/// error.
pub fn decrypt(blob: &[u8], password: &str) -> SamResult<Vec<u8>> {
    if blob.len() < BLOB_OVERHEAD {
        return Err(SamError::InvalidFile);
    }

    let salt = &blob[..SALT_SIZE];
    let nonce_bytes = &blob[SALT_SIZE..SALT_SIZE + NONCE_SIZE];
    let ciphertext = &blob[SALT_SIZE + NONCE_SIZE..];

    let key = derive_key(password, salt);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SamError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SamError::WrongPassword)
}
