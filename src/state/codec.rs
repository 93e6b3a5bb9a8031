//! Canonical byte serialization of the vault state.
//!
//! The state is encoded as a JSON array of group records, sorted by
//! group name, each holding its entries in insertion order:
//!
//! ```text
//! [ {"name": "default", "entries": [ ... ]}, ... ]
//! ```
//!
//! A list, rather than a JSON object, is used so that duplicate group
//! names are visible to the decoder instead of being silently merged.
//! The container treats these bytes as an opaque blob; they are only
//! ever written encrypted.

use serde::{Deserialize, Serialize};

use super::{Entry, State};
use crate::errors::{PassVaultError, Result};

#[derive(Serialize, Deserialize)]
struct GroupRecord {
    name: String,
    entries: Vec<Entry>,
}

/// Encode the state to its canonical plaintext bytes.
///
/// Rejects states that violate the model invariants (duplicate entry
/// names within a group, empty names).
pub fn encode_state(state: &State) -> Result<Vec<u8>> {
    let mut records = Vec::new();

    for (name, entries) in state.groups() {
        if name.is_empty() {
            return Err(PassVaultError::Encoding("group name cannot be empty".into()));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(PassVaultError::Encoding(format!(
                    "group '{name}' contains an entry with an empty name"
                )));
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(PassVaultError::Encoding(format!(
                    "group '{name}' contains duplicate entry '{}'",
                    entry.name
                )));
            }
        }
        records.push(GroupRecord {
            name: name.clone(),
            entries: entries.clone(),
        });
    }

    serde_json::to_vec(&records)
        .map_err(|e| PassVaultError::Encoding(format!("state serialization: {e}")))
}

/// Decode state bytes produced by `encode_state`.
///
/// Rejects truncated input, duplicate group names, empty group names,
/// and duplicate entry names within a group.  Decode failures are
/// classified as database corruption: they can only occur after the
/// HMAC already verified, which a well-formed writer never produces.
pub fn decode_state(bytes: &[u8]) -> Result<State> {
    let records: Vec<GroupRecord> = serde_json::from_slice(bytes)
        .map_err(|e| PassVaultError::CorruptDatabase(format!("state decode: {e}")))?;

    let mut state = State::new();
    for record in records {
        if record.name.is_empty() {
            return Err(PassVaultError::CorruptDatabase(
                "state contains an empty group name".into(),
            ));
        }
        for (i, entry) in record.entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(PassVaultError::CorruptDatabase(format!(
                    "group '{}' contains an entry with an empty name",
                    record.name
                )));
            }
            if record.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(PassVaultError::CorruptDatabase(format!(
                    "group '{}' contains duplicate entry '{}'",
                    record.name, entry.name
                )));
            }
        }
        if !state.insert_group_raw(record.name.clone(), record.entries) {
            return Err(PassVaultError::CorruptDatabase(format!(
                "state contains duplicate group '{}'",
                record.name
            )));
        }
    }

    Ok(state)
}
