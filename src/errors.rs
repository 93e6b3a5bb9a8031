use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in passvault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong password and tampered file are deliberately indistinguishable
    /// so the error cannot be used as a password-guessing oracle.
    #[error("incorrect password or corrupt database")]
    AuthFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Database errors ---
    #[error("Corrupt database: {0}")]
    CorruptDatabase(String),

    #[error("Database too big — encrypted payload is {0} bytes, refusing to save")]
    PayloadTooLarge(usize),

    #[error("Invalid state: {0}")]
    Encoding(String),

    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    // --- Entry and group errors ---
    #[error("Entry '{0}' not found in group '{1}'")]
    EntryNotFound(String, String),

    #[error("Entry '{0}' already exists in group '{1}'")]
    EntryAlreadyExists(String, String),

    #[error("Group '{0}' not found")]
    GroupNotFound(String),

    #[error("Group '{0}' already exists")]
    GroupAlreadyExists(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for passvault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
