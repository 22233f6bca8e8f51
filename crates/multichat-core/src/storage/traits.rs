//! Core traits and errors for key-value storage

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Flat string key-value persistence
///
/// This is the local storage the credential record lives in. Values are
/// opaque text; callers serialize their own records.
///
/// Implementations:
/// - `MemoryKeyValueStore`: in-process, for tests and ephemeral use
/// - `FileKeyValueStore`: one JSON object file on disk
/// - `KeychainKeyValueStore`: the operating system keychain
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a value; removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if a key holds a value
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
