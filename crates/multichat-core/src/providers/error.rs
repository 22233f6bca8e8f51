//! Provider error types

use thiserror::Error;

use crate::types::{ModelId, ProviderKind};

/// Public CORS proxy suggested when a provider blocks browser-origin calls
pub const SUGGESTED_PROXY: &str = "https://corsproxy.io/?";

/// Errors that can occur during provider operations
///
/// A closed taxonomy: every failure of a send resolves to one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// First-party key missing or rejected by the platform
    #[error("First-party API key was not found or is invalid")]
    CredentialNotFound,

    /// No user-supplied key for a third-party provider; no request was sent
    #[error("API key is required for {provider}")]
    MissingCredential { provider: ProviderKind },

    /// HTTP 403/405/0 or a transport-level failure
    #[error("Request to {provider} was blocked or forbidden{}", status_suffix(.status))]
    BlockedOrForbidden {
        provider: ProviderKind,
        status: Option<u16>,
    },

    /// HTTP 401: a key was sent but the provider rejected it
    #[error("{provider} rejected the API key (401 Unauthorized)")]
    Unauthorized { provider: ProviderKind },

    /// Any other non-success HTTP status
    #[error("HTTP error! status: {status}")]
    Http { provider: ProviderKind, status: u16 },

    /// Unclassified failure, original message preserved
    #[error("{0}")]
    Passthrough(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|s| format!(" (status {})", s))
        .unwrap_or_default()
}

impl ProviderError {
    /// Classify a non-success HTTP status from an OpenAI-compatible provider
    ///
    /// Status 0 is what a browser transport reports for a request it blocked
    /// on network policy, so it lands with 403/405.
    pub fn from_status(provider: ProviderKind, status: u16) -> Self {
        match status {
            0 | 403 | 405 => Self::BlockedOrForbidden {
                provider,
                status: Some(status),
            },
            401 => Self::Unauthorized { provider },
            _ => Self::Http { provider, status },
        }
    }

    /// Classify a transport failure (no HTTP response was received)
    pub fn blocked(provider: ProviderKind) -> Self {
        Self::BlockedOrForbidden {
            provider,
            status: None,
        }
    }

    pub fn missing_credential(provider: ProviderKind) -> Self {
        Self::MissingCredential { provider }
    }

    pub fn passthrough(message: impl Into<String>) -> Self {
        Self::Passthrough(message.into())
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BlockedOrForbidden { status, .. } => *status,
            Self::Unauthorized { .. } => Some(401),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether routing through a CORS proxy is the likely fix
    pub fn suggests_proxy(&self) -> bool {
        matches!(self, Self::BlockedOrForbidden { .. })
    }

    /// Guidance to show the user for a failed send to `model`
    pub fn user_message(&self, model: ModelId) -> String {
        let provider = model.provider().display_name();
        match self {
            Self::CredentialNotFound => {
                "Error: Google API Key not found. Please select a valid Google key in Settings."
                    .to_string()
            }
            Self::MissingCredential { .. } => format!(
                "Error: Missing API key for {}. You must provide your own key in Settings to use non-Gemini models.",
                provider
            ),
            Self::BlockedOrForbidden { .. } => format!(
                "Error (CORS/Forbidden): The request to {} was blocked. These providers generally do not allow requests directly from a browser. You need to use a CORS proxy (for example {}) to fix this.",
                provider, SUGGESTED_PROXY
            ),
            Self::Unauthorized { .. } => format!(
                "Error (401): Unauthorized. Your API Key for {} is incorrect.",
                provider
            ),
            Self::Http { .. } | Self::Passthrough(_) => format!("Error: {}", self),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
