//! `credvault unlock` — open a session with the master password.

use crate::cli::output;
use crate::cli::{open_backend, prompt_master_password, Cli};
use crate::errors::Result;
use crate::gate;
use crate::vault::{HydrateOutcome, VaultSession};

/// Execute the `unlock` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (mut backend, settings) = open_backend(cli)?;

    let master = prompt_master_password()?;
    gate::unlock(&mut backend, &master, settings.min_master_length)?;

    // Load the vault once so the user sees what they unlocked.
    let (session, outcome) = VaultSession::open(Box::new(backend))?;
    if outcome == HydrateOutcome::DiscardedMalformed {
        output::warning("Stored vault data was unreadable and has been discarded.");
    }

    output::success(&format!(
        "Vault unlocked — {} credential(s) stored.",
        session.record_count()
    ));
    output::tip("Run `credvault list` to see them, `credvault lock` when done.");

    Ok(())
}
