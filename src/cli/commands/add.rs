//! `credvault add` — store a new credential.

use crate::cli::output;
use crate::cli::{open_backend, parse_category, prompt_secret, Cli, PolicyArgs};
use crate::errors::Result;
use crate::gate;
use crate::generator;
use crate::vault::{HydrateOutcome, SecretSource, VaultSession};

/// Execute the `add` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: &str,
    account: &str,
    site: &str,
    category: &str,
    secret: Option<&str>,
    generate: bool,
    policy: PolicyArgs,
) -> Result<()> {
    let (backend, settings) = open_backend(cli)?;
    gate::require_unlocked(&backend)?;

    // Unknown category names are rejected here; only hydrated legacy
    // data is silently normalized to Other.
    let category = parse_category(category)?;

    // Determine where the secret comes from.
    let source = if generate {
        SecretSource::Generated(policy.to_policy(settings.default_password_length))
    } else if let Some(s) = secret {
        output::warning("Secret provided on command line — it may appear in shell history.");
        SecretSource::Provided(s.to_string())
    } else {
        SecretSource::Provided(prompt_secret(title)?)
    };

    let (mut session, outcome) = VaultSession::open(Box::new(backend))?;
    if outcome == HydrateOutcome::DiscardedMalformed {
        output::warning("Stored vault data was unreadable and has been discarded.");
    }

    let record = session.add_credential(title, account, source, site, category)?;

    output::success(&format!(
        "Stored '{}' ({} total, strength: {})",
        record.title,
        session.record_count(),
        output::strength_label(generator::strength(&record.secret)),
    ));

    if generate {
        // Shown once so the user can capture it; `list --show-secrets`
        // can recover it later.
        output::info(&format!("Generated secret: {}", record.secret));
    }

    Ok(())
}
