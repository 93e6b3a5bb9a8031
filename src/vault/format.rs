//! The `GH00` binary database format.
//!
//! A vault file has this fixed layout:
//!
//! ```text
//! [GH00: 4][salt: 32][B1: 32][B2: 32][B3: 32][B4: 32][MAC: 64][payload]
//! ```
//!
//! - **Version** (`GH00`): identifies the format; readers reject
//!   anything else.
//! - **Salt**: per-file salt for the Argon2id password key.
//! - **B1..B4**: the data key `K` and MAC key `L`, wrapped as 16-byte
//!   halves under the password key (`B1`/`B2` hold `K`, `B3`/`B4` hold
//!   `L`).
//! - **MAC**: HMAC-SHA-512 over `salt || plaintext state`.
//! - **Payload**: the AES-256-GCM encrypted state, never empty.
//!
//! Readers cap the file size *before* any cryptographic work so a
//! crafted multi-gigabyte file cannot exhaust memory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::crypto::integrity::TAG_LEN;
use crate::crypto::kdf::SALT_LEN;
use crate::crypto::wrap::WRAPPED_LEN;
use crate::errors::{PassVaultError, Result};

/// Version tag at the start of every vault file.
pub const DB_VERSION: &[u8; 4] = b"GH00";

/// Floor on the file size, part of the format contract.
pub const MIN_DB_LEN: u64 = 200;

/// Cap on the encrypted payload when writing.
pub const MAX_DB_LEN: usize = 64_000 * 1024;

/// Cap on the whole file when reading, checked before decryption.
pub const MAX_READ_LEN: u64 = 32_000_000;

/// Fixed-size portion: version + salt + four wrapped blocks + MAC.
const HEADER_LEN: usize = 4 + SALT_LEN + 4 * WRAPPED_LEN + TAG_LEN;

/// A parsed (still encrypted) vault file.
pub struct Container {
    pub salt: [u8; SALT_LEN],
    /// Wrapped key halves in file order: `K` lower, `K` upper, `L`
    /// lower, `L` upper.
    pub wrapped: [[u8; WRAPPED_LEN]; 4],
    pub mac: [u8; TAG_LEN],
    pub payload: Vec<u8>,
}

impl Container {
    /// Assemble the container into its on-disk byte sequence.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.payload.len());
        buf.extend_from_slice(DB_VERSION);
        buf.extend_from_slice(&self.salt);
        for block in &self.wrapped {
            buf.extend_from_slice(block);
        }
        buf.extend_from_slice(&self.mac);
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Parse a container from raw file bytes, validating the version
    /// tag and the structural layout.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 4 || &data[..4] != DB_VERSION {
            return Err(PassVaultError::CorruptDatabase(
                "unsupported database version".into(),
            ));
        }
        if data.len() <= HEADER_LEN {
            return Err(PassVaultError::CorruptDatabase(
                "file truncated — missing payload".into(),
            ));
        }

        let mut offset = 4;
        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&data[offset..offset + SALT_LEN]);
        offset += SALT_LEN;

        let mut wrapped = [[0u8; WRAPPED_LEN]; 4];
        for block in &mut wrapped {
            block.copy_from_slice(&data[offset..offset + WRAPPED_LEN]);
            offset += WRAPPED_LEN;
        }

        let mut mac = [0u8; TAG_LEN];
        mac.copy_from_slice(&data[offset..offset + TAG_LEN]);
        offset += TAG_LEN;

        let payload = data[offset..].to_vec();
        if payload.len() > MAX_DB_LEN {
            return Err(PassVaultError::CorruptDatabase(
                "payload exceeds the maximum database size".into(),
            ));
        }

        debug!(
            salt = %hex::encode(salt),
            payload_len = payload.len(),
            "parsed database container"
        );

        Ok(Self {
            salt,
            wrapped,
            mac,
            payload,
        })
    }
}

/// Read a vault file, enforcing the size bounds before parsing.
pub fn read_container(path: &Path) -> Result<Container> {
    if !path.exists() {
        return Err(PassVaultError::VaultNotFound(path.to_path_buf()));
    }

    let size = fs::metadata(path)?.len();
    if size < MIN_DB_LEN {
        return Err(PassVaultError::CorruptDatabase(format!(
            "file is {size} bytes, smaller than the {MIN_DB_LEN}-byte minimum"
        )));
    }
    if size > MAX_READ_LEN {
        return Err(PassVaultError::CorruptDatabase(format!(
            "file is {size} bytes, larger than the {MAX_READ_LEN}-byte read limit"
        )));
    }

    let data = fs::read(path)?;
    Container::parse(&data)
}

/// Write a vault file to disk **atomically**.
///
/// The container is written to a temp file in the same directory and
/// renamed over the target, so an interrupted write never leaves a
/// truncated database behind.
pub fn write_container(path: &Path, container: &Container) -> Result<()> {
    let bytes = container.to_bytes();

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    if let Err(e) = fs::write(&tmp_path, &bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    fs::rename(&tmp_path, path)?;

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "database written"
    );

    Ok(())
}
