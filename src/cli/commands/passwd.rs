//! `passvault passwd` — change the master password.
//!
//! Re-derives everything: fresh salt, fresh data and MAC keys, and a
//! full rewrite of the database file.

use crate::cli::{open_vault, output, prompt_new_password, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `passwd` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (state, _old_password) = open_vault(cli)?;

    let new_password = prompt_new_password()?;
    vault::save_vault(&cli.database, &new_password, &state)?;

    output::success("Master password changed");
    Ok(())
}
