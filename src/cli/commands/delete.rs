//! `credvault delete` — remove a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_backend, Cli};
use crate::errors::{CredVaultError, Result};
use crate::gate;
use crate::vault::VaultSession;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let (backend, _settings) = open_backend(cli)?;
    gate::require_unlocked(&backend)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete credential '{id}'?"))
            .default(false)
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let (mut session, _outcome) = VaultSession::open(Box::new(backend))?;

    if session.remove_credential(id)? {
        output::success(&format!("Deleted credential '{id}'"));
    } else {
        output::warning(&format!("No credential with id '{id}' — nothing deleted."));
    }

    Ok(())
}
