//! `passvault group` — create, list and remove groups.

use crate::cli::{open_vault, output, Cli, GroupAction};
use crate::errors::Result;
use crate::state::DEFAULT_GROUP;
use crate::vault;

/// Execute a `group` subcommand.
pub fn execute(cli: &Cli, action: &GroupAction) -> Result<()> {
    match action {
        GroupAction::New { name } => {
            let (mut state, master_password) = open_vault(cli)?;
            state.create_group(name)?;
            vault::save_vault(&cli.database, &master_password, &state)?;
            output::success(&format!("Group '{name}' created"));
        }
        GroupAction::List => {
            let (state, _password) = open_vault(cli)?;
            if state.is_empty() {
                output::info("The vault is empty.");
                return Ok(());
            }
            for (name, entries) in state.groups() {
                println!("{name} ({} entries)", entries.len());
            }
        }
        GroupAction::Rm { name } => {
            let (mut state, master_password) = open_vault(cli)?;
            state.remove_group(name)?;
            vault::save_vault(&cli.database, &master_password, &state)?;
            if name == DEFAULT_GROUP {
                output::success("Default group cleared (it cannot be removed)");
            } else {
                output::success(&format!("Group '{name}' removed"));
            }
        }
    }
    Ok(())
}
