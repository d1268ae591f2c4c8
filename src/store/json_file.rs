//! File-backed store.
//!
//! All entries live in one JSON object on disk. The file is replaced after
//! every mutation by writing a `.tmp` sibling and renaming it over the
//! target, so a crash leaves either the old or the new contents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConverterError, ConverterResult};

use super::KeyValueStore;

/// A [`KeyValueStore`] persisted as a JSON object of strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or is not a
    /// JSON object of strings.
    pub fn open<P: AsRef<Path>>(path: P) -> ConverterResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries: BTreeMap<String, String> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| store_error(&path, e))?;
            serde_json::from_str(&content).map_err(|e| store_error(&path, e))?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened store");
        Ok(Self { path, entries })
    }

    /// Returns the location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> ConverterResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| store_error(&self.path, e))?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| store_error(&self.path, e))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content).map_err(|e| store_error(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| store_error(&self.path, e))
    }
}

fn store_error(path: &Path, error: impl std::fmt::Display) -> ConverterError {
    ConverterError::StoreError {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> ConverterResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ConverterResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> ConverterResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("language", "en").unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("theme").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("en"));
        assert_eq!(reopened.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("language", "en").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("store.json")]);
    }

    #[test]
    fn test_stale_temp_file_does_not_affect_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        // Torn write of a later flush that never reached the rename.
        fs::write(path.with_extension("tmp"), "{\n  \"the").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        match JsonFileStore::open(&path) {
            Err(ConverterError::StoreError { path: p, .. }) => assert!(p.ends_with("store.json")),
            other => panic!("Expected StoreError, got {:?}", other),
        }
    }
}
