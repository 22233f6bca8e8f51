//! Streaming result types

use serde::{Deserialize, Serialize};

use crate::providers::GenerateContentResponse;

/// Terminal payload of a streamed request
///
/// Delivered exactly once to the completion callback, after every chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    /// Last response fragment from the first-party API
    ///
    /// Kept whole so the caller can pull grounding metadata from it.
    FirstParty(GenerateContentResponse),
    /// Full concatenated content from an OpenAI-compatible stream
    Text { text: String },
}

impl CompletionResult {
    /// Create a text completion
    pub fn text(text: impl Into<String>) -> Self {
        CompletionResult::Text { text: text.into() }
    }

    /// Text carried by the completion
    ///
    /// For first-party completions this is the text of the final fragment
    /// only, not the whole streamed answer.
    pub fn as_text(&self) -> String {
        match self {
            CompletionResult::FirstParty(response) => response.text(),
            CompletionResult::Text { text } => text.clone(),
        }
    }

    /// Web citations attached to the completion
    ///
    /// Always empty for OpenAI-compatible completions.
    pub fn grounding_links(&self) -> Vec<GroundingLink> {
        match self {
            CompletionResult::FirstParty(response) => response.grounding_links(),
            CompletionResult::Text { .. } => Vec::new(),
        }
    }
}

/// A web citation from a search-grounded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    pub uri: String,
    pub title: String,
}

impl GroundingLink {
    /// Create a link; an empty title falls back to the uri
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        let uri = uri.into();
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| uri.clone());
        Self { uri, title }
    }
}

/// Result of the image generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// `data:image/png;base64,...` URI, empty if the model returned no image
    pub image_url: String,
    /// Text the model returned alongside the image
    pub description: String,
}
