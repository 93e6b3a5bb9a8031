//! Top-level vault operations: save, load, master-password change.
//!
//! Both operations are stateless: the caller owns the `State`, the file
//! on disk is replaced wholesale on save, and every piece of key
//! material lives only for the duration of one call.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::kdf::KEY_LEN;
use crate::crypto::wrap::HALF_LEN;
use crate::crypto::{
    compute_tag, decrypt, derive_password_key, encrypt, generate_key, generate_salt, unwrap_half,
    verify_tag, wrap_half,
};
use crate::errors::{PassVaultError, Result};
use crate::state::{decode_state, encode_state, State};
use crate::vault::format::{self, Container, MAX_DB_LEN};

/// View a 32-byte key as its two 16-byte wire halves.
fn split_key(key: &[u8; KEY_LEN]) -> (&[u8; HALF_LEN], &[u8; HALF_LEN]) {
    let (lo, hi) = key.split_at(HALF_LEN);
    (
        lo.try_into().expect("16-byte lower half"),
        hi.try_into().expect("16-byte upper half"),
    )
}

/// Encrypt the state and write it to `path`, replacing any existing
/// file.
///
/// A fresh salt and fresh data/MAC keys are drawn on every call, so two
/// saves of the same state never produce the same bytes.
pub fn save_vault(path: &Path, password: &str, state: &State) -> Result<()> {
    let plaintext = Zeroizing::new(encode_state(state)?);

    let salt = generate_salt();
    debug!(salt = %hex::encode(salt), "generated fresh salt");

    let p = Zeroizing::new(derive_password_key(password.as_bytes(), &salt)?);
    debug!("derived password key");

    let k = Zeroizing::new(generate_key());
    let l = Zeroizing::new(generate_key());

    let (k_lo, k_hi) = split_key(&k);
    let (l_lo, l_hi) = split_key(&l);
    let wrapped = [
        wrap_half(&p, k_lo),
        wrap_half(&p, k_hi),
        wrap_half(&p, l_lo),
        wrap_half(&p, l_hi),
    ];
    for (i, block) in wrapped.iter().enumerate() {
        debug!(block = %hex::encode(block), "wrapped key half B{}", i + 1);
    }

    let payload = encrypt(&k, &plaintext)?;
    if payload.len() > MAX_DB_LEN {
        return Err(PassVaultError::PayloadTooLarge(payload.len()));
    }

    let mac = compute_tag(&l, &salt, &plaintext)?;
    debug!(payload_len = payload.len(), "sealed state payload");

    format::write_container(
        path,
        &Container {
            salt,
            wrapped,
            mac,
            payload,
        },
    )
}

/// Read, authenticate and decode the vault at `path`.
///
/// Validation is top-down: size bounds → version tag → key derivation →
/// unwrap → payload decryption → MAC → state decoding.  No plaintext is
/// surfaced before the MAC verifies, and every authentication-relevant
/// failure collapses into the single `AuthFailed` error.
pub fn load_vault(path: &Path, password: &str) -> Result<State> {
    let container = format::read_container(path)?;

    let p = Zeroizing::new(derive_password_key(password.as_bytes(), &container.salt)?);
    debug!("derived password key, unwrapping B1..B4");

    let mut k = Zeroizing::new([0u8; KEY_LEN]);
    let mut l = Zeroizing::new([0u8; KEY_LEN]);
    k[..HALF_LEN].copy_from_slice(&unwrap_half(&p, &container.wrapped[0]));
    k[HALF_LEN..].copy_from_slice(&unwrap_half(&p, &container.wrapped[1]));
    l[..HALF_LEN].copy_from_slice(&unwrap_half(&p, &container.wrapped[2]));
    l[HALF_LEN..].copy_from_slice(&unwrap_half(&p, &container.wrapped[3]));

    debug!(payload_len = container.payload.len(), "decrypting payload");
    let plaintext = Zeroizing::new(decrypt(&k, &container.payload)?);

    let expected = compute_tag(&l, &container.salt, &plaintext)?;
    if !verify_tag(&expected, &container.mac) {
        return Err(PassVaultError::AuthFailed);
    }
    debug!("database authenticated");

    decode_state(&plaintext)
}

/// Re-encrypt the vault under a new master password.
///
/// Loads with the old password, then saves with the new one: a fresh
/// salt and fresh `K`/`L` are drawn and the file is fully replaced.
pub fn change_master_password(path: &Path, old_password: &str, new_password: &str) -> Result<()> {
    let state = load_vault(path, old_password)?;
    save_vault(path, new_password, &state)
}
