//! In-memory key-value store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{KeyValueStore, StorageResult};

/// In-memory store for tests and ephemeral use
///
/// Values are lost when the store is dropped.
///
/// # Example
///
/// ```
/// use multichat_core::storage::{KeyValueStore, MemoryKeyValueStore};
///
/// let store = MemoryKeyValueStore::new();
/// store.set("provider_keys", "{}").unwrap();
/// assert_eq!(store.get("provider_keys").unwrap(), Some("{}".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial values
    pub fn with_values(initial: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every value
    pub fn clear(&self) {
        self.values.write().clear();
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

impl Clone for MemoryKeyValueStore {
    fn clone(&self) -> Self {
        Self::with_values(self.values.read().clone())
    }
}
