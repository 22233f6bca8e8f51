//! File-backed key-value store
//!
//! All keys live in a single JSON object file, by default
//! `<data dir>/multichat/storage.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::traits::{KeyValueStore, StorageResult};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as one JSON object on disk
///
/// The file is read lazily on first access and cached; every write rewrites
/// the whole file. A missing file reads as an empty store.
///
/// # Example
///
/// ```no_run
/// use multichat_core::storage::{FileKeyValueStore, KeyValueStore};
///
/// let store = FileKeyValueStore::user();
/// store.set("provider_keys", r#"{"groq":"gsk-..."}"#).unwrap();
/// ```
pub struct FileKeyValueStore {
    path: PathBuf,
    cache: RwLock<Option<Entries>>,
}

impl FileKeyValueStore {
    /// Create a store backed by a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a store in the per-user data directory
    pub fn user() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local/share")
        });
        Self::new(data_dir.join("multichat").join("storage.json"))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Drop the cache so the next access re-reads the file
    pub fn reload(&self) -> StorageResult<()> {
        let entries = self.load()?;
        *self.cache.write() = Some(entries);
        Ok(())
    }

    fn load(&self) -> StorageResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn entries(&self) -> StorageResult<Entries> {
        if let Some(entries) = self.cache.read().as_ref() {
            return Ok(entries.clone());
        }

        let entries = self.load()?;
        *self.cache.write() = Some(entries.clone());
        Ok(entries)
    }

    fn modify(&self, f: impl FnOnce(&mut Entries)) -> StorageResult<()> {
        let mut entries = self.entries()?;
        f(&mut entries);
        self.save(&entries)?;
        *self.cache.write() = Some(entries);
        Ok(())
    }
}

impl std::fmt::Debug for FileKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKeyValueStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = FileKeyValueStore::new(&path);
        assert!(!store.exists());
        assert_eq!(store.get("provider_keys").unwrap(), None);

        store.set("provider_keys", "{\"groq\":\"gsk\"}").unwrap();
        assert!(store.exists());

        // A fresh instance reads what the first one wrote
        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(
            reopened.get("provider_keys").unwrap(),
            Some("{\"groq\":\"gsk\"}".to_string())
        );
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert!(!store.contains("a"));
        assert!(store.contains("b"));

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("\"a\""));
    }

    #[test]
    fn test_file_store_reload_sees_external_edit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKeyValueStore::new(&path);
        store.set("k", "old").unwrap();

        fs::write(&path, r#"{"k":"new"}"#).unwrap();
        assert_eq!(store.get("k").unwrap(), Some("old".to_string()));

        store.reload().unwrap();
        assert_eq!(store.get("k").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(store.get("k").is_err());
    }
}
