//! `passvault init` — create a new, empty vault file.

use crate::cli::{output, prompt_new_password, Cli};
use crate::errors::{PassVaultError, Result};
use crate::state::State;
use crate::vault;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    if cli.database.exists() {
        output::tip("Use `passvault add` to put entries into the existing vault.");
        return Err(PassVaultError::VaultAlreadyExists(cli.database.clone()));
    }

    let password = prompt_new_password()?;

    vault::save_vault(&cli.database, &password, &State::new())?;

    output::success(&format!("Vault created at {}", cli.database.display()));
    Ok(())
}
