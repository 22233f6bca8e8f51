//! Per-provider credential record

use serde::{Deserialize, Serialize};

use crate::types::ProviderKind;

/// User-supplied keys for the OpenAI-compatible providers plus an optional
/// proxy URL
///
/// Plain data: passed by value into each request, no validation beyond
/// blank checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cerebras: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ProviderKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groq(mut self, key: impl Into<String>) -> Self {
        self.groq = Some(key.into());
        self
    }

    pub fn with_cerebras(mut self, key: impl Into<String>) -> Self {
        self.cerebras = Some(key.into());
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// The trimmed key for a provider, `None` when absent or blank
    ///
    /// Google never has a user-supplied key here; its key is injected into
    /// the first-party client.
    pub fn key_for(&self, provider: ProviderKind) -> Option<&str> {
        match provider {
            ProviderKind::Groq => non_blank(&self.groq),
            ProviderKind::Cerebras => non_blank(&self.cerebras),
            ProviderKind::Google => None,
        }
    }

    /// The trimmed proxy URL, `None` when absent or blank
    pub fn proxy(&self) -> Option<&str> {
        non_blank(&self.proxy_url)
    }

    /// Whether a usable key is configured for the provider
    pub fn has_key(&self, provider: ProviderKind) -> bool {
        self.key_for(provider).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for_trims_and_rejects_blank() {
        let keys = ProviderKeys::new()
            .with_groq("  gsk-123  ")
            .with_cerebras("   ");

        assert_eq!(keys.key_for(ProviderKind::Groq), Some("gsk-123"));
        assert_eq!(keys.key_for(ProviderKind::Cerebras), None);
        assert_eq!(keys.key_for(ProviderKind::Google), None);
        assert!(keys.has_key(ProviderKind::Groq));
        assert!(!keys.has_key(ProviderKind::Cerebras));
    }

    #[test]
    fn test_proxy() {
        assert_eq!(ProviderKeys::new().proxy(), None);
        assert_eq!(ProviderKeys::new().with_proxy_url(" ").proxy(), None);
        assert_eq!(
            ProviderKeys::new()
                .with_proxy_url(" https://corsproxy.io/? ")
                .proxy(),
            Some("https://corsproxy.io/?")
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let keys = ProviderKeys::new()
            .with_groq("g")
            .with_cerebras("c")
            .with_proxy_url("p");
        let json = serde_json::to_value(&keys).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "groq": "g", "cerebras": "c", "proxyUrl": "p" })
        );
    }

    #[test]
    fn test_deserialize_empty_strings() {
        let keys: ProviderKeys =
            serde_json::from_str(r#"{"groq":"","cerebras":"","proxyUrl":""}"#).unwrap();
        assert!(!keys.has_key(ProviderKind::Groq));
        assert_eq!(keys.proxy(), None);
    }
}
