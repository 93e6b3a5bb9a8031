//! Fixed-size key-half wrapping under the password key.
//!
//! The data key `K` and MAC key `L` are stored in the database as four
//! 16-byte halves, each encrypted with AES-256-CTR under the password
//! key `P`.  Each call draws a fresh random 16-byte IV, so the wrapped
//! block is exactly 32 bytes:
//!
//! ```text
//! [ 16-byte IV | 16-byte CTR ciphertext ]
//! ```
//!
//! The wrap itself carries no authentication.  A wrong password or a
//! tampered block yields garbage key material, which is caught
//! downstream when the payload fails to decrypt or the HMAC does not
//! verify; both surface as the same authentication error.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use rand::RngCore;

type Aes256Ctr = Ctr128BE<Aes256>;

/// Size of one plaintext key half.
pub const HALF_LEN: usize = 16;

/// Size of one wrapped block on the wire (IV + ciphertext).
pub const WRAPPED_LEN: usize = 32;

/// Wrap a 16-byte key half under the password key.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext).
pub fn wrap_half(key: &[u8; 32], half: &[u8; HALF_LEN]) -> [u8; WRAPPED_LEN] {
    let mut iv = [0u8; HALF_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let mut block = [0u8; WRAPPED_LEN];
    block[..HALF_LEN].copy_from_slice(&iv);
    block[HALF_LEN..].copy_from_slice(half);

    let mut cipher = Aes256Ctr::new(key.into(), (&iv).into());
    cipher.apply_keystream(&mut block[HALF_LEN..]);

    block
}

/// Unwrap a 32-byte block produced by `wrap_half`.
///
/// Never fails: garbage input simply yields garbage key material, to be
/// rejected by the later payload decryption and HMAC checks.
pub fn unwrap_half(key: &[u8; 32], block: &[u8; WRAPPED_LEN]) -> [u8; HALF_LEN] {
    let mut iv = [0u8; HALF_LEN];
    iv.copy_from_slice(&block[..HALF_LEN]);

    let mut half = [0u8; HALF_LEN];
    half.copy_from_slice(&block[HALF_LEN..]);

    let mut cipher = Aes256Ctr::new(key.into(), (&iv).into());
    cipher.apply_keystream(&mut half);

    half
}
