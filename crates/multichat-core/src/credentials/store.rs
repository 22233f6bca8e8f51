//! Persistence of the credential record

use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::Logger;
use crate::storage::{KeyValueStore, StorageResult};

use super::keys::ProviderKeys;

/// Storage key the record is written under
pub const PROVIDER_KEYS_STORAGE_KEY: &str = "provider_keys";

/// Holds the current `ProviderKeys` and mirrors every change to storage
///
/// The record is read once when the store is opened and written back on
/// every change. A missing or unreadable stored value opens as an empty
/// record.
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
    current: RwLock<ProviderKeys>,
    logger: Arc<dyn Logger>,
}

impl CredentialStore {
    /// Open the store, reading the persisted record
    pub fn open(backend: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        let current = Self::read(backend.as_ref(), logger.as_ref());
        Self {
            backend,
            current: RwLock::new(current),
            logger,
        }
    }

    fn read(backend: &dyn KeyValueStore, logger: &dyn Logger) -> ProviderKeys {
        match backend.get(PROVIDER_KEYS_STORAGE_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(keys) => keys,
                Err(e) => {
                    logger.warn(&format!(
                        "[CredentialStore] Ignoring unreadable record in {}: {}",
                        backend.name(),
                        e
                    ));
                    ProviderKeys::default()
                }
            },
            Ok(None) => ProviderKeys::default(),
            Err(e) => {
                logger.warn(&format!(
                    "[CredentialStore] Failed to read from {}: {}",
                    backend.name(),
                    e
                ));
                ProviderKeys::default()
            }
        }
    }

    /// Snapshot of the current record
    pub fn keys(&self) -> ProviderKeys {
        self.current.read().clone()
    }

    /// Replace the record and persist it
    pub fn save(&self, keys: ProviderKeys) -> StorageResult<()> {
        let text = serde_json::to_string(&keys)?;
        self.backend.set(PROVIDER_KEYS_STORAGE_KEY, &text)?;
        *self.current.write() = keys;
        self.logger.debug(&format!(
            "[CredentialStore] Saved provider keys to {}",
            self.backend.name()
        ));
        Ok(())
    }

    /// Modify the record in place and persist the result
    pub fn update(&self, f: impl FnOnce(&mut ProviderKeys)) -> StorageResult<ProviderKeys> {
        let mut keys = self.keys();
        f(&mut keys);
        self.save(keys.clone())?;
        Ok(keys)
    }

    /// Erase the persisted record and reset to empty
    pub fn clear(&self) -> StorageResult<()> {
        self.backend.remove(PROVIDER_KEYS_STORAGE_KEY)?;
        *self.current.write() = ProviderKeys::default();
        Ok(())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the keys themselves
        f.debug_struct("CredentialStore")
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{CaptureLogger, NoOpLogger};
    use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
    use crate::types::ProviderKind;
    use tempfile::tempdir;

    #[test]
    fn test_open_empty() {
        let store = CredentialStore::open(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(NoOpLogger),
        );
        assert_eq!(store.keys(), ProviderKeys::default());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = CredentialStore::open(
            Arc::new(FileKeyValueStore::new(&path)),
            Arc::new(NoOpLogger),
        );
        store
            .save(ProviderKeys::new().with_groq("gsk-1").with_proxy_url("https://proxy.test"))
            .unwrap();

        let reopened = CredentialStore::open(
            Arc::new(FileKeyValueStore::new(&path)),
            Arc::new(NoOpLogger),
        );
        assert_eq!(reopened.keys().key_for(ProviderKind::Groq), Some("gsk-1"));
        assert_eq!(reopened.keys().proxy(), Some("https://proxy.test"));
    }

    #[test]
    fn test_update_writes_through() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let store = CredentialStore::open(backend.clone(), Arc::new(NoOpLogger));

        let keys = store
            .update(|k| k.cerebras = Some("csk-9".to_string()))
            .unwrap();
        assert!(keys.has_key(ProviderKind::Cerebras));

        let raw = backend.get(PROVIDER_KEYS_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"cerebras":"csk-9"}"#);
    }

    #[test]
    fn test_malformed_record_opens_empty() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        backend.set(PROVIDER_KEYS_STORAGE_KEY, "{not json").unwrap();
        let logger = Arc::new(CaptureLogger::new());

        let store = CredentialStore::open(backend, logger.clone());
        assert_eq!(store.keys(), ProviderKeys::default());
        assert!(logger.contains("WARN", "unreadable record"));
    }

    #[test]
    fn test_clear() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let store = CredentialStore::open(backend.clone(), Arc::new(NoOpLogger));
        store.save(ProviderKeys::new().with_groq("g")).unwrap();

        store.clear().unwrap();
        assert_eq!(store.keys(), ProviderKeys::default());
        assert!(!backend.contains(PROVIDER_KEYS_STORAGE_KEY));
    }
}
