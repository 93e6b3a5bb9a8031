//! State module — the in-memory logical data model.
//!
//! This module provides:
//! - The `Entry` login record type (`entry`)
//! - The `State` mapping of group name → ordered entries
//! - Canonical byte serialization of the state (`codec`)

pub mod codec;
pub mod entry;

use std::collections::BTreeMap;

use crate::errors::{PassVaultError, Result};

pub use codec::{decode_state, encode_state};
pub use entry::Entry;

/// Name of the distinguished group that always exists in a non-empty
/// vault and cannot be deleted.
pub const DEFAULT_GROUP: &str = "default";

/// The logical vault contents: group name → ordered entry list.
///
/// Group names are unique.  Entry order within a group is insertion
/// order and survives save/load round-trips.  `(group, entry name)` is
/// unique across the vault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    groups: BTreeMap<String, Vec<Entry>>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the state has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate over groups in name order.
    pub fn groups(&self) -> impl Iterator<Item = (&String, &Vec<Entry>)> {
        self.groups.iter()
    }

    /// Entries of one group, or `None` if the group does not exist.
    pub fn group(&self, name: &str) -> Option<&[Entry]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Create a new, empty group.
    ///
    /// Also materializes the `default` group, which must exist in any
    /// non-empty vault.
    pub fn create_group(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(PassVaultError::Encoding("group name cannot be empty".into()));
        }
        if self.groups.contains_key(name) {
            return Err(PassVaultError::GroupAlreadyExists(name.to_string()));
        }
        self.groups.insert(name.to_string(), Vec::new());
        self.ensure_default();
        Ok(())
    }

    /// Remove a group and all its entries.
    ///
    /// The `default` group is never removed; deleting it clears its
    /// entries instead.
    pub fn remove_group(&mut self, name: &str) -> Result<()> {
        if name == DEFAULT_GROUP {
            match self.groups.get_mut(DEFAULT_GROUP) {
                Some(entries) => entries.clear(),
                None => return Err(PassVaultError::GroupNotFound(name.to_string())),
            }
            return Ok(());
        }
        match self.groups.remove(name) {
            Some(_) => Ok(()),
            None => Err(PassVaultError::GroupNotFound(name.to_string())),
        }
    }

    /// Add an entry to a group, creating the group if needed.
    ///
    /// Fails if the entry is invalid or an entry of the same name
    /// already exists in the group.
    pub fn add_entry(&mut self, group: &str, entry: Entry) -> Result<()> {
        if group.is_empty() {
            return Err(PassVaultError::Encoding("group name cannot be empty".into()));
        }
        entry.validate()?;

        let entries = self.groups.entry(group.to_string()).or_default();
        if entries.iter().any(|e| e.name == entry.name) {
            return Err(PassVaultError::EntryAlreadyExists(
                entry.name,
                group.to_string(),
            ));
        }
        entries.push(entry);
        self.ensure_default();
        Ok(())
    }

    /// Look up an entry by group and name.
    pub fn find_entry(&self, group: &str, name: &str) -> Option<&Entry> {
        self.groups.get(group)?.iter().find(|e| e.name == name)
    }

    /// Remove an entry by group and name.
    pub fn remove_entry(&mut self, group: &str, name: &str) -> Result<()> {
        let entries = self
            .groups
            .get_mut(group)
            .ok_or_else(|| PassVaultError::GroupNotFound(group.to_string()))?;

        let position = entries.iter().position(|e| e.name == name).ok_or_else(|| {
            PassVaultError::EntryNotFound(name.to_string(), group.to_string())
        })?;
        entries.remove(position);
        Ok(())
    }

    /// Insert a whole group during decoding.  Returns `false` if the
    /// group name is already present.
    pub(crate) fn insert_group_raw(&mut self, name: String, entries: Vec<Entry>) -> bool {
        use std::collections::btree_map::Entry as MapEntry;
        match self.groups.entry(name) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(slot) => {
                slot.insert(entries);
                true
            }
        }
    }

    fn ensure_default(&mut self) {
        self.groups.entry(DEFAULT_GROUP.to_string()).or_default();
    }
}
