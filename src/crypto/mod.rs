//! Cryptographic functions for the Sam backup engine
//!
//! Provides AES-256-GCM authenticated encryption with PBKDF2-HMAC-SHA-256
//! key derivation for password-protected backup blobs. This module knows
//! nothing about the data model; it seals and opens opaque byte buffers.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, BLOB_OVERHEAD};
pub use key_derivation::{derive_key, generate_salt, DerivedKey, PBKDF2_ITERATIONS};
pub use secure_memory::SecureString;
