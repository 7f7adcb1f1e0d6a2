//! Storage module — the key-value backend the vault persists through.
//!
//! The vault never touches the filesystem (or any other medium)
//! directly.  Everything goes through the `KeyValueBackend` trait, so
//! tests can swap in `MemoryBackend` and the CLI uses `FileBackend`.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::errors::Result;

/// Key holding the serialized credential list.
///
/// The key names (and the JSON field names inside the value) are fixed
/// so that previously persisted data stays readable.
pub const RECORDS_KEY: &str = "passwordManager_passwords";

/// Key owned by the unlock gate: `"true"` while a session is open.
pub const AUTH_FLAG_KEY: &str = "passwordManager_authenticated";

/// Key owned by the unlock gate: base64 of the master password.
pub const MASTER_KEY_KEY: &str = "passwordManager_masterKey";

/// A minimal string key-value store.
///
/// `get` of an absent key is `Ok(None)`, and `remove` of an absent key
/// is an `Ok` no-op.  Any real failure surfaces as
/// `CredVaultError::PersistenceFailure`.
pub trait KeyValueBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`, if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}
