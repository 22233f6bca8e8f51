//! Provider trait definitions

use async_trait::async_trait;

use crate::credentials::ProviderKeys;
use crate::types::{CompletionResult, ConversationTurn, GeneratedImage, ModelId};

use super::error::ProviderResult;

/// Per-call options for a streamed send
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Ask the first-party model to ground its answer in web search
    pub use_search: bool,
    /// User keys and proxy for the OpenAI-compatible providers
    pub keys: ProviderKeys,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, use_search: bool) -> Self {
        self.use_search = use_search;
        self
    }

    pub fn with_keys(mut self, keys: ProviderKeys) -> Self {
        self.keys = keys;
        self
    }
}

/// Everything an adapter needs for one streamed request
///
/// Owned: the history is passed by value and never written back.
#[derive(Debug, Clone)]
pub struct StreamRequest {
    pub model: ModelId,
    /// Prior turns, oldest first
    pub history: Vec<ConversationTurn>,
    /// The new user message, appended as the final turn
    pub prompt: String,
    pub options: SendOptions,
}

impl StreamRequest {
    pub fn new(model: ModelId, history: Vec<ConversationTurn>, prompt: impl Into<String>) -> Self {
        Self {
            model,
            history,
            prompt: prompt.into(),
            options: SendOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }
}

/// Sink for streamed text fragments
pub type ChunkSink<'a> = dyn FnMut(&str) + Send + 'a;

/// A streaming chat backend
///
/// Implementations forward every text fragment to `on_chunk` in arrival
/// order and return the terminal payload. `Ok(None)` means the stream ended
/// without producing anything to complete with.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name for logs (e.g., "gemini", "openai-compatible")
    fn name(&self) -> &str;

    /// Run one request to completion
    async fn stream_chat(
        &self,
        request: StreamRequest,
        on_chunk: &mut ChunkSink<'_>,
    ) -> ProviderResult<Option<CompletionResult>>;
}

/// A backend that turns a prompt into an image
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> ProviderResult<GeneratedImage>;
}
