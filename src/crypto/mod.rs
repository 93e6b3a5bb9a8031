//! Cryptographic primitives for passvault.
//!
//! This module provides:
//! - Argon2id password-based key derivation (`kdf`)
//! - AES-256-GCM payload encryption and decryption (`encryption`)
//! - Fixed-size key-half wrapping under the password key (`wrap`)
//! - HMAC-SHA-512 integrity tags (`integrity`)

pub mod encryption;
pub mod integrity;
pub mod kdf;
pub mod wrap;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_password_key, ...};
pub use encryption::{decrypt, encrypt};
pub use integrity::{compute_tag, verify_tag};
pub use kdf::{derive_password_key, generate_key, generate_salt};
pub use wrap::{unwrap_half, wrap_half};
