//! Vault module — credential records, the store that owns them, and the
//! session facade the presentation layer talks to.
//!
//! This module provides:
//! - `CredentialRecord` and `Category` types (`record`)
//! - `VaultStore` with create/delete/search and persist/hydrate (`store`)
//! - `VaultSession`, the thin composition over store + generator (`session`)

pub mod record;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use record::{Category, CredentialRecord};
pub use session::{SecretSource, VaultSession};
pub use store::{HydrateOutcome, VaultStore};
