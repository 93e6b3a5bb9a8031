//! `passvault list` — overview of all groups and entries.

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (state, _password) = open_vault(cli)?;
    output::print_state_table(&state);
    Ok(())
}
