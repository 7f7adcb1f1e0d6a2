//! In-memory key-value backend.
//!
//! Clones share the underlying map, so two `VaultStore` instances built
//! from clones of the same `MemoryBackend` observe each other's writes.
//! That makes persist/hydrate round-trips testable without touching the
//! filesystem.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::{CredVaultError, Result};

use super::KeyValueBackend;

/// A shared in-memory string map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| CredVaultError::PersistenceFailure("memory backend poisoned".into()))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_key_is_none() {
        let backend = MemoryBackend::new();
        assert!(backend.get("missing").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn clones_share_the_map() {
        let mut backend = MemoryBackend::new();
        let twin = backend.clone();
        backend.set("k", "v").unwrap();
        assert_eq!(twin.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let mut backend = MemoryBackend::new();
        backend.remove("missing").unwrap();
    }
}
