//! Local key-value storage
//!
//! The credential record is persisted as serialized text under a fixed key.
//! This module provides the pluggable store it is written to:
//! - `KeyValueStore` trait for custom backends
//! - Built-in implementations: `MemoryKeyValueStore`, `FileKeyValueStore`,
//!   `KeychainKeyValueStore`

mod file_store;
mod keychain_store;
mod memory_store;
mod traits;

pub use file_store::FileKeyValueStore;
pub use keychain_store::KeychainKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use traits::{KeyValueStore, StorageError, StorageResult};
