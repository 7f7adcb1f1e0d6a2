//! File-backed key-value storage.
//!
//! Each key maps to one file inside the storage directory.  Writes go
//! through a temp file in the same directory followed by a rename, so
//! readers never see a half-written value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{CredVaultError, Result};

use super::KeyValueBackend;

/// Key-value backend rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            CredVaultError::PersistenceFailure(format!("create {}: {e}", dir.display()))
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the file holding `key`.
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredVaultError::PersistenceFailure(format!(
                "read {key}: {e}"
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Atomic write: temp file in the same directory, then rename.
        let path = self.key_path(key);
        let tmp_path = self.dir.join(format!(".{key}.tmp"));

        fs::write(&tmp_path, value).map_err(|e| {
            CredVaultError::PersistenceFailure(format!("write {key}: {e}"))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            CredVaultError::PersistenceFailure(format!("rename {key}: {e}"))
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredVaultError::PersistenceFailure(format!(
                "remove {key}: {e}"
            ))),
        }
    }
}
