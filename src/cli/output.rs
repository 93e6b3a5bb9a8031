//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::state::State;

/// Print a green success message.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message.
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print every group and entry as a table (passwords are never shown).
pub fn print_state_table(state: &State) {
    if state.is_empty() {
        info("The vault is empty.");
        tip("Run `passvault add <name>` to create your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Group", "Name", "Username", "URL", "Updated"]);

    for (group, entries) in state.groups() {
        if entries.is_empty() {
            table.add_row(vec![group.as_str(), "<empty>", "", "", ""]);
            continue;
        }
        for entry in entries {
            table.add_row(vec![
                group.clone(),
                entry.name.clone(),
                entry.username.clone(),
                entry.url.clone(),
                entry.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]);
        }
    }

    println!("{table}");
}
