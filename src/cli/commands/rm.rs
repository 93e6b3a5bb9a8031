//! `passvault rm` — remove an entry.

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `rm` command.
pub fn execute(cli: &Cli, name: &str, group: &str) -> Result<()> {
    let (mut state, master_password) = open_vault(cli)?;

    state.remove_entry(group, name)?;
    vault::save_vault(&cli.database, &master_password, &state)?;

    output::success(&format!("Entry '{name}' removed from group '{group}'"));
    Ok(())
}
