use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CredVaultError, Result};

/// Project-level configuration, loaded from `.credvault.toml`.
///
/// Every field has a sensible default so CredVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) where vault data
    /// is stored.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Default length for generated passwords.
    #[serde(default = "default_password_length")]
    pub default_password_length: usize,

    /// Minimum master password length enforced by the unlock gate.
    #[serde(default = "default_min_master_length")]
    pub min_master_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_storage_dir() -> String {
    ".credvault".to_string()
}

fn default_password_length() -> usize {
    16
}

fn default_min_master_length() -> usize {
    8
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            default_password_length: default_password_length(),
            min_master_length: default_min_master_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".credvault.toml";

    /// Load settings from `<project_dir>/.credvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the storage directory.
    pub fn storage_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.storage_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.storage_dir, ".credvault");
        assert_eq!(s.default_password_length, 16);
        assert_eq!(s.min_master_length, 8);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.storage_dir, ".credvault");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
storage_dir = "vault-data"
default_password_length = 24
"#;
        fs::write(tmp.path().join(".credvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.storage_dir, "vault-data");
        assert_eq!(settings.default_password_length, 24);
        // Unspecified fields fall back to defaults.
        assert_eq!(settings.min_master_length, 8);
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".credvault.toml"), "not [valid").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn storage_path_joins_project_dir() {
        let settings = Settings::default();
        let path = settings.storage_path(Path::new("/tmp/project"));
        assert_eq!(path, Path::new("/tmp/project/.credvault"));
    }
}
