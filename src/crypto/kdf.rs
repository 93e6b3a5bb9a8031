//! Password-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  The parameters are fixed: they are part of the
//! `GH00` database format contract and are never stored in the file, so
//! changing them requires a new format version.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of derived and generated keys in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Argon2id memory cost in KiB (64 MB).
const MEMORY_KIB: u32 = 65_536;

/// Argon2id iteration count.
const ITERATIONS: u32 = 3;

/// Argon2id parallelism lanes.
const PARALLELISM: u32 = 4;

/// Derive the 32-byte password key `P` from the master password and a
/// per-file salt.
///
/// The same password + salt always produce the same key.
pub fn derive_password_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| {
            PassVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    Ok(key)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}

/// Generate a cryptographically random 32-byte key.
///
/// Used for the per-save data key `K` and MAC key `L`.
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    rand::rngs::OsRng.fill_bytes(&mut key);
    key
}
