//! File-backed preference store - a small JSON key-value document.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::environment::PreferenceStore;
use crate::error::{Result, VitaeError};

/// Preference store persisted as a JSON object file.
///
/// ```text
/// .vitae/
/// └── preferences.json        # {"resume-language": "es"}
/// ```
///
/// Reads of a missing or unparseable file behave as an empty store, and
/// write failures are swallowed, matching the contract of
/// [`PreferenceStore`]: durability is best-effort, the in-memory
/// preference stays correct either way.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the JSON file at `path`.
    ///
    /// The file (and its parent directory) is created lazily on the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full key-value map, surfacing corruption explicitly.
    ///
    /// The [`PreferenceStore`] read path treats corruption as absence;
    /// this is for callers that want to know (e.g. `vitae status`).
    pub fn entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.path).map_err(|e| VitaeError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            VitaeError::Persistence(format!(
                "Failed to parse preference store '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    VitaeError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            VitaeError::Persistence(format!(
                "Failed to create file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, entries).map_err(|e| {
            VitaeError::Persistence(format!("Failed to serialize preference store: {}", e))
        })?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries().ok()?.remove(key)
    }

    fn write(&mut self, key: &str, value: &str) {
        let mut entries = self.entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        // Best-effort durability: a failed write is skipped silently.
        let _ = self.save(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.path().join(".vitae").join("preferences.json"))
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.read("resume-language"), None);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write("resume-language", "es");
        assert_eq!(store.read("resume-language").as_deref(), Some("es"));

        // A second store over the same path sees the persisted value.
        let reopened = store_in(&dir);
        assert_eq!(reopened.read("resume-language").as_deref(), Some("es"));
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write("resume-language", "en");
        assert!(dir.path().join(".vitae").join("preferences.json").exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_absent_but_entries_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not json").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.read("resume-language"), None);
        assert!(matches!(
            store.entries(),
            Err(VitaeError::Persistence(_))
        ));
    }

    #[test]
    fn test_write_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write("theme", "dark");
        store.write("resume-language", "es");

        let entries = store.entries().unwrap();
        assert_eq!(entries.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(
            entries.get("resume-language").map(String::as_str),
            Some("es")
        );
    }
}
