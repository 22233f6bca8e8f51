//! Provider credentials
//!
//! - `ProviderKeys`: the per-call record of user keys and proxy URL
//! - `CredentialStore`: loads the record once and writes it back on change
//! - `ambient_api_key`: one-shot environment lookup for the first-party key

mod env;
mod keys;
mod store;

pub use env::{ambient_api_key, env_vars_for};
pub use keys::ProviderKeys;
pub use store::{CredentialStore, PROVIDER_KEYS_STORAGE_KEY};
