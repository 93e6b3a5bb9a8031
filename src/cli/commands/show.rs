//! `passvault show` — print a single entry.

use console::style;

use crate::cli::{open_vault, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `show` command.
pub fn execute(cli: &Cli, name: &str, group: &str, reveal: bool) -> Result<()> {
    let (state, _password) = open_vault(cli)?;

    let entry = state.find_entry(group, name).ok_or_else(|| {
        PassVaultError::EntryNotFound(name.to_string(), group.to_string())
    })?;

    println!("{}: {}", style("Name").bold(), entry.name);
    println!("{}: {}", style("URL").bold(), entry.url);
    println!("{}: {}", style("Username").bold(), entry.username);
    if reveal {
        println!("{}: {}", style("Password").bold(), entry.password);
    } else {
        println!("{}: ******** (use --reveal to show)", style("Password").bold());
    }
    println!("{}: {}", style("Description").bold(), entry.description);
    println!(
        "{}: {}",
        style("Updated").bold(),
        entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
