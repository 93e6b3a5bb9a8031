//! `passvault gen` — generate and print one password.

use crate::errors::Result;
use crate::generator::generate_password;

/// Execute the `gen` command.
pub fn execute() -> Result<()> {
    println!("{}", generate_password());
    Ok(())
}
