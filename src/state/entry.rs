//! Login entry type stored inside a vault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{PassVaultError, Result};

/// Minimum length for a user-chosen entry password.
pub const MIN_PASSWORD_LEN: usize = 4;

/// A single login record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry name, unique within its group (e.g. "gmail").
    pub name: String,

    /// Website address.  May be empty; if not, it must parse as a URL.
    pub url: String,

    /// Login username.
    pub username: String,

    /// Login password.
    pub password: String,

    /// Free-form description.
    pub description: String,

    /// When this entry was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Check the entry invariants: non-empty name, parseable URL when
    /// present, password of at least `MIN_PASSWORD_LEN` characters.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(PassVaultError::Encoding(
                "entry name cannot be empty".into(),
            ));
        }
        if !self.url.is_empty() && Url::parse(&self.url).is_err() {
            return Err(PassVaultError::Encoding(format!(
                "entry '{}' has an invalid URL: {}",
                self.name, self.url
            )));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(PassVaultError::Encoding(format!(
                "entry '{}' password must be at least {MIN_PASSWORD_LEN} characters",
                self.name
            )));
        }
        Ok(())
    }
}
