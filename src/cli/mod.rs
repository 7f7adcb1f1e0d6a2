//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CredVaultError, Result};
use crate::generator::GeneratorPolicy;
use crate::storage::FileBackend;
use crate::vault::Category;

/// CredVault CLI: local password vault with a built-in generator.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Local password vault with a built-in generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage directory (default: from .credvault.toml, or .credvault)
    #[arg(long, global = true)]
    pub storage_dir: Option<String>,
}

/// Character-class and length flags shared by `add --generate` and
/// `generate`.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PolicyArgs {
    /// Generated password length (default: from config, 16)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols (!@#$%^&*...)
    #[arg(long)]
    pub no_symbols: bool,
}

impl PolicyArgs {
    /// Turn the flags into a generator policy.
    pub fn to_policy(self, default_length: usize) -> GeneratorPolicy {
        GeneratorPolicy {
            length: self.length.unwrap_or(default_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
        }
    }
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Unlock the vault with your master password
    Unlock,

    /// Lock the vault again
    Lock,

    /// Add a credential to the vault
    Add {
        /// Display title (e.g. Gmail, Netflix)
        title: String,

        /// Username or email for the account
        #[arg(short, long)]
        account: String,

        /// Website label (optional)
        #[arg(long, default_value = "")]
        site: String,

        /// Category: Social, Work, Banking, Shopping, Entertainment, Other
        #[arg(short, long, default_value = "Other")]
        category: String,

        /// Secret value (omit for interactive prompt or --generate)
        #[arg(long, conflicts_with = "generate")]
        secret: Option<String>,

        /// Generate the secret instead of providing one
        #[arg(short, long)]
        generate: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// List credentials, optionally filtered by a search query
    List {
        /// Substring to match against title, site, or account
        query: Option<String>,

        /// Show stored secrets instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Delete a credential by id
    Delete {
        /// Record id (shown by `list`)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a password without storing anything
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings and open the file backend the command should use.
///
/// The `--storage-dir` flag overrides the config file's `storage_dir`.
pub fn open_backend(cli: &Cli) -> Result<(FileBackend, Settings)> {
    let project_dir = Path::new(".");
    let settings = Settings::load(project_dir)?;

    let dir = match &cli.storage_dir {
        Some(dir) => project_dir.join(dir),
        None => settings.storage_path(project_dir),
    };

    let backend = FileBackend::open(&dir)?;
    Ok((backend, settings))
}

/// Get the master password, trying in order:
/// 1. `CREDVAULT_MASTER` env var (scripting/CI)
/// 2. Piped stdin (stdin is not a terminal)
/// 3. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first.
    if let Ok(pw) = std::env::var("CREDVAULT_MASTER") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Piped input.
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    // 3. Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get a secret value for `add`, from piped stdin or an interactive
/// prompt.
pub fn prompt_secret(title: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Password::new()
        .with_prompt(format!("Secret for {title}"))
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("secret prompt: {e}")))
}

/// Parse a category name, rejecting anything outside the fixed set.
///
/// The store itself normalizes unknown categories to `Other` when
/// hydrating old data, but fresh input at the CLI boundary must name a
/// real category.
pub fn parse_category(input: &str) -> Result<Category> {
    Category::from_input(input).ok_or_else(|| {
        CredVaultError::CommandFailed(format!(
            "unknown category '{input}' — expected one of: Social, Work, Banking, Shopping, Entertainment, Other"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category_accepts_known_names() {
        assert_eq!(parse_category("Banking").unwrap(), Category::Banking);
        assert_eq!(parse_category("social").unwrap(), Category::Social);
    }

    #[test]
    fn parse_category_rejects_unknown_names() {
        assert!(parse_category("Crypto").is_err());
        assert!(parse_category("").is_err());
    }

    #[test]
    fn policy_args_default_to_all_classes() {
        let args = PolicyArgs {
            length: None,
            no_uppercase: false,
            no_lowercase: false,
            no_digits: false,
            no_symbols: false,
        };
        let policy = args.to_policy(16);
        assert_eq!(policy, GeneratorPolicy::default());
    }

    #[test]
    fn policy_args_invert_the_no_flags() {
        let args = PolicyArgs {
            length: Some(20),
            no_uppercase: true,
            no_lowercase: false,
            no_digits: false,
            no_symbols: true,
        };
        let policy = args.to_policy(16);
        assert_eq!(policy.length, 20);
        assert!(!policy.include_uppercase);
        assert!(policy.include_lowercase);
        assert!(policy.include_digits);
        assert!(!policy.include_symbols);
    }
}
