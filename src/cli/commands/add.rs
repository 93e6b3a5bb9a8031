//! `passvault add` — interactively create a new entry.

use chrono::Utc;
use dialoguer::{Confirm, Input, Password};
use url::Url;
use zeroize::Zeroizing;

use crate::cli::{open_vault, output, Cli};
use crate::errors::{PassVaultError, Result};
use crate::generator::generate_password;
use crate::state::entry::MIN_PASSWORD_LEN;
use crate::state::Entry;
use crate::vault;

/// Execute the `add` command.
pub fn execute(cli: &Cli, name: &str, group: &str) -> Result<()> {
    let (mut state, master_password) = open_vault(cli)?;

    if state.find_entry(group, name).is_some() {
        return Err(PassVaultError::EntryAlreadyExists(
            name.to_string(),
            group.to_string(),
        ));
    }

    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("username prompt: {e}")))?;

    // Re-prompt until the URL parses or is left empty.
    let url = loop {
        let candidate: String = Input::new()
            .with_prompt("URL (optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PassVaultError::CommandFailed(format!("URL prompt: {e}")))?;

        if candidate.is_empty() || Url::parse(&candidate).is_ok() {
            break candidate;
        }
        output::warning("Invalid URL, please try again.");
    };

    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("description prompt: {e}")))?;

    let generate = Confirm::new()
        .with_prompt("Generate password?")
        .default(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("confirmation prompt: {e}")))?;

    let password = if generate {
        let pw = Zeroizing::new(generate_password());
        output::success(&format!("Generated password for {name}"));
        pw
    } else {
        prompt_entry_password()?
    };

    state.add_entry(
        group,
        Entry {
            name: name.to_string(),
            url,
            username,
            password: password.to_string(),
            description,
            updated_at: Utc::now(),
        },
    )?;

    vault::save_vault(&cli.database, &master_password, &state)?;
    output::success(&format!("Entry '{name}' added to group '{group}'"));
    Ok(())
}

/// Prompt for a manual entry password, re-prompting until it is long
/// enough.
fn prompt_entry_password() -> Result<Zeroizing<String>> {
    loop {
        let password = Password::new()
            .with_prompt(format!(
                "Enter a password (at least {MIN_PASSWORD_LEN} characters)"
            ))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning("Password too short, please try again!");
            continue;
        }
        return Ok(Zeroizing::new(password));
    }
}
