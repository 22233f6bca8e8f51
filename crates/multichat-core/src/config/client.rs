//! Endpoint configuration for the provider adapters

use serde::{Deserialize, Serialize};

use crate::types::ProviderKind;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_CEREBRAS_ENDPOINT: &str = "https://api.cerebras.ai/v1/chat/completions";

/// Where each provider is reached
///
/// Defaults point at the production APIs. Every field may be omitted from a
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the Gemini REST API (without `/v1beta`)
    pub gemini_api_base: String,
    /// Full chat-completions URL for Groq
    pub groq_endpoint: String,
    /// Full chat-completions URL for Cerebras
    pub cerebras_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            groq_endpoint: DEFAULT_GROQ_ENDPOINT.to_string(),
            cerebras_endpoint: DEFAULT_CEREBRAS_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gemini_api_base(mut self, base: impl Into<String>) -> Self {
        self.gemini_api_base = base.into();
        self
    }

    pub fn with_groq_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.groq_endpoint = endpoint.into();
        self
    }

    pub fn with_cerebras_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.cerebras_endpoint = endpoint.into();
        self
    }

    /// Chat-completions endpoint for an OpenAI-compatible provider
    ///
    /// Groq has its own endpoint; every other provider falls back to
    /// Cerebras.
    pub fn openai_endpoint(&self, provider: ProviderKind) -> &str {
        match provider {
            ProviderKind::Groq => &self.groq_endpoint,
            _ => &self.cerebras_endpoint,
        }
    }
}
