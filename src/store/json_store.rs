//! Address book persisted as a JSON array on disk

use super::traits::{AddressBookStore, StoredEntry};
use crate::state::AddressBookEntry;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Address book backed by a single JSON file, rewritten on every add
pub struct JsonAddressBook {
    path: PathBuf,
    entries: Vec<StoredEntry>,
}

impl JsonAddressBook {
    /// Open the book at `path`. A missing file is an empty book.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: Vec<StoredEntry> = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read address book {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse address book {}", path.display()))?
        } else {
            Vec::new()
        };

        tracing::info!(
            "Opened address book {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl AddressBookStore for JsonAddressBook {
    fn add_entry(&mut self, entry: AddressBookEntry) {
        self.entries.push(StoredEntry {
            entry,
            added_at: Utc::now(),
        });
        if let Err(e) = self.save() {
            tracing::warn!(
                "Failed to save address book {}: {:#}",
                self.path.display(),
                e
            );
        }
    }

    fn entries(&self) -> Vec<StoredEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{transform, RawAddressRecord};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn entry(first_name: &str) -> AddressBookEntry {
        let raw = RawAddressRecord {
            street: "Dorpsstraat".to_string(),
            city: "Town".to_string(),
            postcode: "1211EP".to_string(),
            ..Default::default()
        };
        let personal = BTreeMap::from([("firstName".to_string(), first_name.to_string())]);
        AddressBookEntry::merge(&transform(&raw, "60"), &personal)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let book = JsonAddressBook::open(dir.path().join("book.json")).unwrap();
        assert!(book.entries().is_empty());
    }

    #[test]
    fn test_add_entry_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("book.json");

        let mut book = JsonAddressBook::open(&path).unwrap();
        book.add_entry(entry("Ada"));
        book.add_entry(entry("Grace"));
        assert!(path.exists());

        let reopened = JsonAddressBook::open(&path).unwrap();
        let names: Vec<_> = reopened
            .entries()
            .iter()
            .map(|e| e.entry.full_name())
            .collect();
        assert_eq!(names, vec!["Ada".to_string(), "Grace".to_string()]);
        assert_eq!(reopened.entries(), book.entries());
    }

    #[test]
    fn test_open_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();
        assert!(JsonAddressBook::open(&path).is_err());
    }

    #[test]
    fn test_failed_save_keeps_entry_in_memory() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("book.json");
        fs::create_dir_all(&path).unwrap();

        let mut book = JsonAddressBook {
            path,
            entries: Vec::new(),
        };
        book.add_entry(entry("Ada"));
        assert_eq!(book.entries().len(), 1);
    }
}
