//! The vault session — the thin composition the presentation layer uses.
//!
//! A session wires the generator into record creation and otherwise
//! delegates straight to the store.  It holds no state of its own
//! beyond the store it wraps; dropping the session drops the in-memory
//! vault while leaving the persisted copy untouched.

use crate::errors::Result;
use crate::generator::{self, GeneratorPolicy};
use crate::storage::KeyValueBackend;

use super::record::{Category, CredentialRecord};
use super::store::{HydrateOutcome, VaultStore};

/// Where the secret for a new credential comes from.
#[derive(Debug, Clone)]
pub enum SecretSource {
    /// A secret the user typed or pasted.
    Provided(String),
    /// Generate a fresh secret with this policy first.
    Generated(GeneratorPolicy),
}

/// One unlocked vault session.
pub struct VaultSession {
    store: VaultStore,
}

impl VaultSession {
    /// Open a session: construct the store over `backend` and perform
    /// the once-per-session hydrate.
    pub fn open(backend: Box<dyn KeyValueBackend>) -> Result<(Self, HydrateOutcome)> {
        let mut store = VaultStore::new(backend);
        let outcome = store.hydrate()?;
        Ok((Self { store }, outcome))
    }

    /// Add a credential, generating the secret first if asked to.
    pub fn add_credential(
        &mut self,
        title: &str,
        account: &str,
        secret: SecretSource,
        site: &str,
        category: Category,
    ) -> Result<CredentialRecord> {
        let secret = match secret {
            SecretSource::Provided(s) => s,
            SecretSource::Generated(policy) => generator::generate(&policy)?,
        };
        self.store.create(title, account, &secret, site, category)
    }

    /// Remove a credential by id; `false` means it did not exist.
    pub fn remove_credential(&mut self, id: &str) -> Result<bool> {
        self.store.delete(id)
    }

    /// Records matching `query`, in insertion order.
    pub fn list_filtered(&self, query: &str) -> Vec<&CredentialRecord> {
        self.store.search(query)
    }

    /// Number of stored records.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}
