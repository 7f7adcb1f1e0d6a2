//! `credvault generate` — produce a password without storing anything.

use crate::cli::output;
use crate::cli::PolicyArgs;
use crate::config::Settings;
use crate::errors::{CredVaultError, Result};
use crate::generator;

/// Execute the `generate` command.
///
/// Needs no backend and no unlocked session, just the configured
/// default length.
pub fn execute(policy: PolicyArgs, copy: bool) -> Result<()> {
    let settings = Settings::load(std::path::Path::new("."))?;

    let policy = policy.to_policy(settings.default_password_length);
    let secret = generator::generate(&policy)?;

    let strength = generator::strength(&secret);
    println!("{secret}");
    output::info(&format!(
        "Strength: {} (score {})",
        output::strength_label(strength),
        generator::score(&secret)
    ));

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| CredVaultError::ClipboardError(e.to_string()))?;
        clipboard
            .set_text(secret)
            .map_err(|e| CredVaultError::ClipboardError(e.to_string()))?;
        output::success("Copied to clipboard.");
    }

    Ok(())
}
