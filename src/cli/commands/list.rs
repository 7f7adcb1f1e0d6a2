//! `credvault list` — display credentials in a table.

use crate::cli::output;
use crate::cli::{open_backend, Cli};
use crate::errors::Result;
use crate::gate;
use crate::vault::{HydrateOutcome, VaultSession};

/// Execute the `list` command.
pub fn execute(cli: &Cli, query: Option<&str>, show_secrets: bool) -> Result<()> {
    let (backend, _settings) = open_backend(cli)?;
    gate::require_unlocked(&backend)?;

    let (session, outcome) = VaultSession::open(Box::new(backend))?;
    if outcome == HydrateOutcome::DiscardedMalformed {
        output::warning("Stored vault data was unreadable and has been discarded.");
    }

    let query = query.unwrap_or("");
    let records = session.list_filtered(query);

    if query.trim().is_empty() {
        output::info(&format!("{} credential(s) stored.", records.len()));
    } else {
        output::info(&format!(
            "{} of {} credential(s) match '{}'.",
            records.len(),
            session.record_count(),
            query.trim()
        ));
    }

    output::print_records_table(&records, show_secrets);

    Ok(())
}
