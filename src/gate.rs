//! The unlock gate — a length-only check in front of the vault.
//!
//! This is intentionally not authentication: the gate enforces a
//! minimum master password length, records the unlocked state under the
//! auth flag key, and stores the master password base64-encoded
//! (obfuscation, not encryption).  There is no key derivation and no
//! verification against a stored hash; the vault core never reads or
//! writes the gate's keys.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::errors::{CredVaultError, Result};
use crate::storage::{KeyValueBackend, AUTH_FLAG_KEY, MASTER_KEY_KEY};

/// Unlock the vault for this device.
///
/// Rejects a master password shorter than `min_len` chars; otherwise
/// sets the auth flag and stores the encoded master password.
pub fn unlock(
    backend: &mut dyn KeyValueBackend,
    master_password: &str,
    min_len: usize,
) -> Result<()> {
    if master_password.chars().count() < min_len {
        return Err(CredVaultError::MasterPasswordTooShort(min_len));
    }

    backend.set(AUTH_FLAG_KEY, "true")?;
    backend.set(MASTER_KEY_KEY, &BASE64.encode(master_password))?;
    Ok(())
}

/// Lock the vault: clear the auth flag, leaving stored records (and the
/// encoded master password) untouched.
pub fn lock(backend: &mut dyn KeyValueBackend) -> Result<()> {
    backend.remove(AUTH_FLAG_KEY)
}

/// Whether an unlocked session is open.
pub fn is_unlocked(backend: &dyn KeyValueBackend) -> Result<bool> {
    Ok(matches!(
        backend.get(AUTH_FLAG_KEY)?.as_deref(),
        Some("true")
    ))
}

/// Fail with `VaultLocked` unless a session is open.
pub fn require_unlocked(backend: &dyn KeyValueBackend) -> Result<()> {
    if is_unlocked(backend)? {
        Ok(())
    } else {
        Err(CredVaultError::VaultLocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn short_master_password_is_rejected() {
        let mut backend = MemoryBackend::new();
        let err = unlock(&mut backend, "short", 8).unwrap_err();
        assert!(matches!(err, CredVaultError::MasterPasswordTooShort(8)));
        assert!(!is_unlocked(&backend).unwrap());
    }

    #[test]
    fn unlock_sets_flag_and_encoded_master() {
        let mut backend = MemoryBackend::new();
        unlock(&mut backend, "correct horse", 8).unwrap();

        assert!(is_unlocked(&backend).unwrap());
        let stored = backend.get(MASTER_KEY_KEY).unwrap().unwrap();
        assert_eq!(stored, BASE64.encode("correct horse"));
    }

    #[test]
    fn lock_clears_only_the_flag() {
        let mut backend = MemoryBackend::new();
        unlock(&mut backend, "correct horse", 8).unwrap();
        lock(&mut backend).unwrap();

        assert!(!is_unlocked(&backend).unwrap());
        assert!(backend.get(MASTER_KEY_KEY).unwrap().is_some());
    }

    #[test]
    fn require_unlocked_fails_when_locked() {
        let backend = MemoryBackend::new();
        assert!(matches!(
            require_unlocked(&backend),
            Err(CredVaultError::VaultLocked)
        ));
    }
}
