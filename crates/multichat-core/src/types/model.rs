//! Model identifiers and the provider catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The provider family serving a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Hosted Gemini API (first-party streaming client)
    Google,
    /// Groq OpenAI-compatible inference API
    Groq,
    /// Cerebras OpenAI-compatible inference API
    Cerebras,
}

impl ProviderKind {
    /// Lowercase identifier used in logs and serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Groq => "groq",
            ProviderKind::Cerebras => "cerebras",
        }
    }

    /// Human readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Google => "Google",
            ProviderKind::Groq => "Groq",
            ProviderKind::Cerebras => "Cerebras",
        }
    }

    /// Whether requests to this provider go through the OpenAI-compatible adapter
    pub fn is_openai_compatible(&self) -> bool {
        !matches!(self, ProviderKind::Google)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known model identifiers
///
/// The wire string of each variant is what the provider API expects in the
/// `model` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3Flash,
    #[serde(rename = "gemini-3-pro-preview")]
    Gemini3Pro,
    #[serde(rename = "gemini-2.5-flash-image")]
    GeminiImage,
    #[serde(rename = "llama-3.3-70b-versatile")]
    GroqLlama33,
    #[serde(rename = "llama3.1-70b")]
    CerebrasLlama31,
}

/// Static catalog entry for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: ModelId,
    /// Display name
    pub name: &'static str,
    /// One-line description shown next to the name
    pub description: &'static str,
    pub provider: ProviderKind,
}

const CATALOG: [ModelInfo; 5] = [
    ModelInfo {
        id: ModelId::Gemini3Flash,
        name: "Gemini 3 Flash",
        description: "Fast & Efficient",
        provider: ProviderKind::Google,
    },
    ModelInfo {
        id: ModelId::Gemini3Pro,
        name: "Gemini 3 Pro",
        description: "Power & Logic",
        provider: ProviderKind::Google,
    },
    ModelInfo {
        id: ModelId::GeminiImage,
        name: "Gemini 2.5 Image",
        description: "Creative Vision",
        provider: ProviderKind::Google,
    },
    ModelInfo {
        id: ModelId::GroqLlama33,
        name: "Llama 3.3 70B",
        description: "Ultra Fast Inference",
        provider: ProviderKind::Groq,
    },
    ModelInfo {
        id: ModelId::CerebrasLlama31,
        name: "Llama 3.1 70B",
        description: "Wafer-Scale Speed",
        provider: ProviderKind::Cerebras,
    },
];

impl ModelId {
    /// Every known model, in catalog order
    pub const ALL: [ModelId; 5] = [
        ModelId::Gemini3Flash,
        ModelId::Gemini3Pro,
        ModelId::GeminiImage,
        ModelId::GroqLlama33,
        ModelId::CerebrasLlama31,
    ];

    /// The identifier sent to the provider API
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemini3Flash => "gemini-3-flash-preview",
            ModelId::Gemini3Pro => "gemini-3-pro-preview",
            ModelId::GeminiImage => "gemini-2.5-flash-image",
            ModelId::GroqLlama33 => "llama-3.3-70b-versatile",
            ModelId::CerebrasLlama31 => "llama3.1-70b",
        }
    }

    /// Catalog entry for this model
    pub fn info(&self) -> &'static ModelInfo {
        // CATALOG is laid out in declaration order
        &CATALOG[*self as usize]
    }

    /// The provider family that serves this model
    pub fn provider(&self) -> ProviderKind {
        self.info().provider
    }

    /// Whether search grounding can be requested for this model
    pub fn supports_search(&self) -> bool {
        self.provider() == ProviderKind::Google && !self.is_image_model()
    }

    /// Whether this model answers through the image generation call
    pub fn is_image_model(&self) -> bool {
        matches!(self, ModelId::GeminiImage)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown model identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown model identifier: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelId {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_all() {
        for model in ModelId::ALL {
            assert_eq!(model.info().id, model);
        }
    }

    #[test]
    fn test_provider_lookup() {
        assert_eq!(ModelId::Gemini3Flash.provider(), ProviderKind::Google);
        assert_eq!(ModelId::Gemini3Pro.provider(), ProviderKind::Google);
        assert_eq!(ModelId::GeminiImage.provider(), ProviderKind::Google);
        assert_eq!(ModelId::GroqLlama33.provider(), ProviderKind::Groq);
        assert_eq!(ModelId::CerebrasLlama31.provider(), ProviderKind::Cerebras);
    }

    #[test]
    fn test_parse_round_trip() {
        for model in ModelId::ALL {
            assert_eq!(model.as_str().parse::<ModelId>(), Ok(model));
        }
        assert!("gpt-4".parse::<ModelId>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_string() {
        let json = serde_json::to_string(&ModelId::GroqLlama33).unwrap();
        assert_eq!(json, "\"llama-3.3-70b-versatile\"");

        let parsed: ModelId = serde_json::from_str("\"llama3.1-70b\"").unwrap();
        assert_eq!(parsed, ModelId::CerebrasLlama31);
    }

    #[test]
    fn test_capabilities() {
        assert!(ModelId::Gemini3Flash.supports_search());
        assert!(!ModelId::GeminiImage.supports_search());
        assert!(!ModelId::GroqLlama33.supports_search());
        assert!(ModelId::GeminiImage.is_image_model());
        assert!(ProviderKind::Cerebras.is_openai_compatible());
        assert!(!ProviderKind::Google.is_openai_compatible());
    }
}
