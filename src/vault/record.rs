//! CredentialRecord and Category types stored inside the vault.
//!
//! The JSON field names (`username`, `password`, `website`, `createdAt`)
//! are fixed for compatibility with previously persisted data, so the
//! Rust-side names map through serde renames.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed set of credential categories.
///
/// The set is closed: free-form input that matches none of the variants
/// normalizes to `Other` (see `Category::from_input`), which also covers
/// hydrating old data that carries an unrecognized category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Social,
    Work,
    Banking,
    Shopping,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Social,
        Category::Work,
        Category::Banking,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Work => "Work",
            Category::Banking => "Banking",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Parse a category name, case-insensitively.
    ///
    /// Returns `None` for anything outside the fixed set, letting the
    /// presentation layer reject unknown input outright.
    pub fn from_input(input: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(input.trim()))
    }

    /// Normalize free-form input, falling back to `Other`.
    pub fn parse(input: &str) -> Category {
        Category::from_input(input).unwrap_or_default()
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored login credential.
///
/// Records are immutable once created; the only mutation the vault
/// supports is deletion (an "edit" is add-then-delete at the caller's
/// discretion).  Values are stored verbatim — no hashing, no encryption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Opaque unique identifier, assigned at creation, never reused.
    pub id: String,

    /// Display label, e.g. "Gmail".
    pub title: String,

    /// Username or email used to sign in.
    #[serde(rename = "username")]
    pub account: String,

    /// The stored secret, verbatim.
    #[serde(rename = "password")]
    pub secret: String,

    /// Optional free-text site label; may be empty.
    #[serde(rename = "website", default)]
    pub site: String,

    /// Category, defaulting to `Other`.
    #[serde(default)]
    pub category: Category,

    /// When this record was created.  Set once, immutable.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Case-insensitive substring match against title, site, or account.
    ///
    /// `needle` must already be trimmed and lowercased; the empty needle
    /// matches every record.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.site.to_lowercase().contains(needle)
            || self.account.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_input_is_case_insensitive() {
        assert_eq!(Category::from_input("banking"), Some(Category::Banking));
        assert_eq!(Category::from_input("  WORK "), Some(Category::Work));
        assert_eq!(Category::from_input("crypto"), None);
    }

    #[test]
    fn category_parse_falls_back_to_other() {
        assert_eq!(Category::parse("Entertainment"), Category::Entertainment);
        assert_eq!(Category::parse("does-not-exist"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn record_serializes_with_fixed_field_names() {
        let record = CredentialRecord {
            id: "1700000000000".into(),
            title: "Mail".into(),
            account: "a@b.com".into(),
            secret: "hunter2".into(),
            site: "mail.example".into(),
            category: Category::Work,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["username"], "a@b.com");
        assert_eq!(json["password"], "hunter2");
        assert_eq!(json["website"], "mail.example");
        assert_eq!(json["category"], "Work");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("account").is_none());
    }

    #[test]
    fn unknown_category_deserializes_as_other() {
        let json = r#"{
            "id": "1",
            "title": "T",
            "username": "u",
            "password": "p",
            "website": "",
            "category": "Cryptocurrency",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let record: CredentialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Other);
    }

    #[test]
    fn missing_site_and_category_use_defaults() {
        let json = r#"{
            "id": "1",
            "title": "T",
            "username": "u",
            "password": "p",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let record: CredentialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.site, "");
        assert_eq!(record.category, Category::Other);
    }

    #[test]
    fn matches_query_checks_title_site_and_account() {
        let record = CredentialRecord {
            id: "1".into(),
            title: "Gmail".into(),
            account: "me@example.com".into(),
            secret: "s3cret!".into(),
            site: "mail.google.com".into(),
            category: Category::Social,
            created_at: Utc::now(),
        };

        assert!(record.matches_query("gmail"));
        assert!(record.matches_query("google"));
        assert!(record.matches_query("me@example"));
        assert!(record.matches_query(""));
        // The secret is never searched.
        assert!(!record.matches_query("s3cret"));
    }
}
