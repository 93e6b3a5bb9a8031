//! CLI module — Clap argument parser, password prompts, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};
use crate::state::{State, DEFAULT_GROUP};
use crate::vault;

/// How many wrong-password attempts are allowed before giving up.
const MAX_PASSWORD_ATTEMPTS: usize = 5;

/// passvault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault database file
    #[arg(short, long, default_value = "passvault.db", global = true)]
    pub database: PathBuf,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault
    Init,

    /// Add an entry (interactive)
    Add {
        /// Entry name (e.g. gmail)
        name: String,
        /// Group to add the entry to
        #[arg(short, long, default_value = DEFAULT_GROUP)]
        group: String,
    },

    /// Show a single entry
    Show {
        /// Entry name
        name: String,
        /// Group the entry lives in
        #[arg(short, long, default_value = DEFAULT_GROUP)]
        group: String,
        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// List all groups and entries
    List,

    /// Remove an entry
    Rm {
        /// Entry name
        name: String,
        /// Group the entry lives in
        #[arg(short, long, default_value = DEFAULT_GROUP)]
        group: String,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Generate a password and print it
    Gen,

    /// Change the master password
    Passwd,
}

/// Subcommands of `passvault group`.
#[derive(clap::Subcommand)]
pub enum GroupAction {
    /// Create a new group
    New { name: String },
    /// List group names and sizes
    List,
    /// Remove a group ("default" is cleared instead)
    Rm { name: String },
}

/// Prompt for the master password once.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on
/// drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`
/// and `passwd`).
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation("Confirm master password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.is_empty() {
            output::warning("Master password cannot be empty. Try again.");
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Prompt for the master password and load the vault, re-prompting on a
/// wrong password up to `MAX_PASSWORD_ATTEMPTS` times.
///
/// Returns the decrypted state together with the accepted password so
/// commands can save without prompting again.
pub fn open_vault(cli: &Cli) -> Result<(State, Zeroizing<String>)> {
    for attempt in 1..=MAX_PASSWORD_ATTEMPTS {
        let password = prompt_password()?;
        match vault::load_vault(&cli.database, &password) {
            Ok(state) => return Ok((state, password)),
            Err(PassVaultError::AuthFailed) if attempt < MAX_PASSWORD_ATTEMPTS => {
                output::warning("Incorrect password or corrupt database, try again.");
            }
            Err(e) => return Err(e),
        }
    }
    Err(PassVaultError::AuthFailed)
}
