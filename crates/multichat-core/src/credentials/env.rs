//! Ambient first-party API key lookup

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use crate::types::ProviderKind;

/// Environment variables checked per provider, in priority order
static ENV_VAR_MAP: Lazy<HashMap<ProviderKind, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(ProviderKind::Google, vec!["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"]);
    m.insert(ProviderKind::Groq, vec!["GROQ_API_KEY"]);
    m.insert(ProviderKind::Cerebras, vec!["CEREBRAS_API_KEY"]);
    m
});

/// Environment variable names consulted for a provider
pub fn env_vars_for(provider: ProviderKind) -> &'static [&'static str] {
    ENV_VAR_MAP
        .get(&provider)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

/// Read a provider key from the environment
///
/// Returns the first non-blank value among the provider's variables.
/// Intended to be called once, when a client is constructed; the result is
/// then injected explicitly.
pub fn ambient_api_key(provider: ProviderKind) -> Option<String> {
    env_vars_for(provider)
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
