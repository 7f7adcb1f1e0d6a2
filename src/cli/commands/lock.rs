//! `credvault lock` — close the session.

use crate::cli::output;
use crate::cli::{open_backend, Cli};
use crate::errors::Result;
use crate::gate;

/// Execute the `lock` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (mut backend, _settings) = open_backend(cli)?;
    gate::lock(&mut backend)?;
    output::success("Vault locked.");
    Ok(())
}
