//! System keychain key-value store
//!
//! Uses the OS keychain for storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{KeyValueStore, StorageError, StorageResult};

/// Key-value store backed by the system keychain
///
/// Each key becomes one keychain entry under the store's service name, so
/// the serialized credential record never touches the filesystem.
///
/// # Example
///
/// ```no_run
/// use multichat_core::storage::{KeychainKeyValueStore, KeyValueStore};
///
/// let store = KeychainKeyValueStore::new();
/// store.set("provider_keys", "{}").unwrap();
/// ```
pub struct KeychainKeyValueStore {
    service_name: String,
}

impl KeychainKeyValueStore {
    /// Create a keychain store with the default service name "multichat"
    pub fn new() -> Self {
        Self::with_service("multichat")
    }

    /// Create a keychain store with a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> StorageResult<Entry> {
        Entry::new(&self.service_name, key).map_err(|e| {
            StorageError::NotAvailable(format!("Failed to create keychain entry: {}", e))
        })
    }
}

impl Default for KeychainKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for KeychainKeyValueStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StorageError::Other(format!("Failed to read from keychain: {}", e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| StorageError::Other(format!("Failed to store in keychain: {}", e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::Other(format!("Failed to delete from keychain: {}", e))),
        }
    }
}
