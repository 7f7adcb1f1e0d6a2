//! The vault store — exclusive owner of the credential collection.
//!
//! `VaultStore` holds the in-memory record list and the injected
//! key-value backend.  Every mutation (create, delete) synchronously
//! re-persists the whole collection as a single JSON value; there is no
//! batching and no write-behind.  Callers only ever get `&` views of
//! the records.

use chrono::Utc;

use crate::errors::{CredVaultError, Result};
use crate::storage::{KeyValueBackend, RECORDS_KEY};

use super::record::{Category, CredentialRecord};

/// What `hydrate` found in the backend.
///
/// Malformed persisted data is discarded rather than fatal; the outcome
/// lets the caller surface a warning without the store knowing anything
/// about presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// No records key in the backend — fresh vault.
    Empty,
    /// Loaded this many records.
    Loaded(usize),
    /// The stored value did not parse; starting from an empty state.
    DiscardedMalformed,
}

/// The credential store.  Construct with an injected backend, then
/// `hydrate` once per session before the first read.
pub struct VaultStore {
    backend: Box<dyn KeyValueBackend>,

    /// Insertion-ordered records, oldest first.  No duplicate ids.
    records: Vec<CredentialRecord>,

    /// Largest numeric id issued or seen, so fresh ids never collide.
    last_id: u64,
}

impl VaultStore {
    /// Create an empty store over `backend`.
    pub fn new(backend: Box<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            records: Vec::new(),
            last_id: 0,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a new credential record and persist the vault.
    ///
    /// `title`, `account`, and `secret` must be non-empty after
    /// trimming; the first offending field is reported and the state is
    /// left untouched.  Values are stored verbatim (validation trims
    /// only for the emptiness check).
    ///
    /// If the persist fails the error is returned, but the new record
    /// stays in memory so the caller does not lose unsaved work.
    pub fn create(
        &mut self,
        title: &str,
        account: &str,
        secret: &str,
        site: &str,
        category: Category,
    ) -> Result<CredentialRecord> {
        Self::validate_required(title, "title")?;
        Self::validate_required(account, "account")?;
        Self::validate_required(secret, "secret")?;

        let record = CredentialRecord {
            id: self.next_id(),
            title: title.to_string(),
            account: account.to_string(),
            secret: secret.to_string(),
            site: site.to_string(),
            category,
            created_at: Utc::now(),
        };

        self.records.push(record.clone());
        self.persist()?;

        Ok(record)
    }

    /// Remove the record with the given id, if present.
    ///
    /// Returns whether a removal occurred; deleting an unknown id is a
    /// `false` no-op, not an error.  The vault is re-persisted either
    /// way.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;

        self.persist()?;
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Read views
    // ------------------------------------------------------------------

    /// Case-insensitive substring search over title, site, and account.
    ///
    /// The empty (or all-whitespace) query matches every record.  The
    /// result preserves insertion order; nothing is re-ranked.
    pub fn search(&self, query: &str) -> Vec<&CredentialRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_query(&needle))
            .collect()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the vault holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Replace the in-memory state with the backend's contents.
    ///
    /// An absent key or malformed value leaves the store empty and is
    /// reported through the outcome, never a crash.  Loading also
    /// re-seeds the id watermark from the largest numeric id so fresh
    /// ids never collide with hydrated ones.
    pub fn hydrate(&mut self) -> Result<HydrateOutcome> {
        let raw = match self.backend.get(RECORDS_KEY)? {
            None => {
                self.records.clear();
                return Ok(HydrateOutcome::Empty);
            }
            Some(raw) => raw,
        };

        match serde_json::from_str::<Vec<CredentialRecord>>(&raw) {
            Ok(records) => {
                self.last_id = records
                    .iter()
                    .filter_map(|r| r.id.parse::<u64>().ok())
                    .fold(self.last_id, u64::max);
                let count = records.len();
                self.records = records;
                Ok(HydrateOutcome::Loaded(count))
            }
            Err(_) => {
                self.records.clear();
                Ok(HydrateOutcome::DiscardedMalformed)
            }
        }
    }

    /// Serialize the full record list and write it to the backend.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.records)
            .map_err(|e| CredVaultError::SerializationError(format!("records: {e}")))?;
        self.backend.set(RECORDS_KEY, &json)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Millisecond-timestamp id, bumped past the last issued id so two
    /// creates in the same millisecond still get distinct values.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }

    fn validate_required(value: &str, field: &'static str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(CredVaultError::EmptyField { field });
        }
        Ok(())
    }
}
