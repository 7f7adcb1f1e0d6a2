use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Validation errors ---
    #[error("Required field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    // --- Generator errors ---
    #[error("Select at least one character class to generate a password")]
    EmptyAlphabet,

    #[error("Password length must be a positive number")]
    InvalidLength,

    // --- Persistence errors ---
    #[error("Storage backend failure: {0}")]
    PersistenceFailure(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Unlock gate errors ---
    #[error("Vault is locked — run `credvault unlock` first")]
    VaultLocked,

    #[error("Master password must be at least {0} characters long")]
    MasterPasswordTooShort(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
