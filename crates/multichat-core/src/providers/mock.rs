//! Mock provider for testing
//!
//! Provides deterministic, configurable responses without network dependencies.
//! Useful for exercising the dispatcher's callback contract and integration tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChunkSink, ImageProvider, Provider, StreamRequest};
use crate::logging::Logger;
use crate::types::{CompletionResult, GeneratedImage};

/// Mock response mode
#[derive(Debug, Clone, Default)]
pub enum MockMode {
    /// Echo back the prompt
    #[default]
    Echo,
    /// Return a fixed response
    Fixed(String),
    /// Return response as specific chunks
    Chunks(Vec<String>),
    /// Fail after emitting `delay_chunks` chunks
    Error {
        error: ProviderError,
        delay_chunks: usize,
    },
    /// Succeed without emitting anything or completing
    Empty,
}

/// Configuration for the mock provider
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Response mode
    pub mode: MockMode,
    /// Delay between chunks in milliseconds (0 = no delay)
    pub chunk_delay_ms: u64,
    /// Size of each chunk when splitting fixed/echo responses
    pub chunk_size: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            mode: MockMode::Echo,
            chunk_delay_ms: 0,
            chunk_size: 10,
        }
    }
}

/// Mock chat and image provider for testing
///
/// Every request it receives is recorded and can be inspected with
/// [`MockProvider::requests`].
pub struct MockProvider {
    config: MockConfig,
    requests: Mutex<Vec<StreamRequest>>,
    logger: Arc<dyn Logger>,
}

impl MockProvider {
    /// Create a new mock provider with default config
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_config(MockConfig::default(), logger)
    }

    /// Create with specific config
    pub fn with_config(config: MockConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            requests: Mutex::new(Vec::new()),
            logger,
        }
    }

    fn with_mode(mode: MockMode, logger: Arc<dyn Logger>) -> Self {
        Self::with_config(
            MockConfig {
                mode,
                ..Default::default()
            },
            logger,
        )
    }

    /// Create an echo provider (echoes back the prompt)
    pub fn echo(logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Echo, logger)
    }

    /// Create a fixed response provider
    pub fn fixed(response: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Fixed(response.into()), logger)
    }

    /// Create a chunked response provider
    pub fn chunked(chunks: Vec<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Chunks(chunks), logger)
    }

    /// Create an error-producing provider
    pub fn error(error: ProviderError, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(
            MockMode::Error {
                error,
                delay_chunks: 0,
            },
            logger,
        )
    }

    /// Create a provider that ends every stream without a completion
    pub fn empty(logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Empty, logger)
    }

    /// Set chunk delay
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.config.chunk_delay_ms = delay_ms;
        self
    }

    /// Set chunk size for splitting responses
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<StreamRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Split text into chunks
    fn split_into_chunks(&self, text: &str) -> Vec<String> {
        if self.config.chunk_size == 0 || text.is_empty() {
            return vec![text.to_string()];
        }

        text.chars()
            .collect::<Vec<_>>()
            .chunks(self.config.chunk_size)
            .map(|c| c.iter().collect())
            .collect()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn stream_chat(
        &self,
        request: StreamRequest,
        on_chunk: &mut ChunkSink<'_>,
    ) -> ProviderResult<Option<CompletionResult>> {
        self.logger.debug(&format!(
            "MockProvider: stream_chat called for {}",
            request.model
        ));

        let (chunks, failure) = match &self.config.mode {
            MockMode::Echo => (self.split_into_chunks(&format!("Echo: {}", request.prompt)), None),
            MockMode::Fixed(response) => (self.split_into_chunks(response), None),
            MockMode::Chunks(chunks) => (chunks.clone(), None),
            MockMode::Empty => (Vec::new(), None),
            MockMode::Error {
                error,
                delay_chunks,
            } => {
                let before: Vec<String> = (0..*delay_chunks)
                    .map(|i| format!("Chunk {} before error. ", i))
                    .collect();
                (before, Some(error.clone()))
            }
        };
        let empty = matches!(self.config.mode, MockMode::Empty);

        self.requests.lock().push(request);

        let mut full_content = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            // Apply delay (except for first chunk)
            if i > 0 && self.config.chunk_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.chunk_delay_ms)).await;
            }
            self.logger
                .debug(&format!("MockProvider: Yielding chunk {}: '{}'", i, chunk));
            full_content.push_str(chunk);
            on_chunk(chunk);
        }

        if let Some(error) = failure {
            self.logger.error(&format!("MockProvider: {}", error));
            return Err(error);
        }
        if empty {
            return Ok(None);
        }
        Ok(Some(CompletionResult::text(full_content)))
    }
}

#[async_trait]
impl ImageProvider for MockProvider {
    async fn generate_image(&self, prompt: &str) -> ProviderResult<GeneratedImage> {
        if let MockMode::Error { error, .. } = &self.config.mode {
            return Err(ProviderError::Passthrough(error.to_string()));
        }
        Ok(GeneratedImage {
            image_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            description: format!("Mock image for: {}", prompt),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::types::{ModelId, ProviderKind};

    fn test_logger() -> Arc<dyn Logger> {
        Arc::new(NoOpLogger::new())
    }

    fn test_request(prompt: &str) -> StreamRequest {
        StreamRequest::new(ModelId::Gemini3Flash, vec![], prompt)
    }

    async fn collect(
        provider: &MockProvider,
        prompt: &str,
    ) -> (Vec<String>, ProviderResult<Option<CompletionResult>>) {
        let mut chunks = Vec::new();
        let result = provider
            .stream_chat(test_request(prompt), &mut |c: &str| chunks.push(c.to_string()))
            .await;
        (chunks, result)
    }

    #[tokio::test]
    async fn test_echo_mode() {
        let provider = MockProvider::echo(test_logger());
        let (chunks, result) = collect(&provider, "Hello, world!").await;

        assert!(chunks.concat().contains("Hello, world!"), "Should echo the message");
        assert_eq!(result.unwrap().unwrap().as_text(), chunks.concat());
    }

    #[tokio::test]
    async fn test_fixed_mode() {
        let provider = MockProvider::fixed("This is a test response.", test_logger());
        let (chunks, _) = collect(&provider, "Anything").await;

        assert_eq!(chunks.concat(), "This is a test response.");
    }

    #[tokio::test]
    async fn test_chunked_mode() {
        let chunks = vec![
            "First ".to_string(),
            "second ".to_string(),
            "third.".to_string(),
        ];
        let provider = MockProvider::chunked(chunks.clone(), test_logger()).with_delay(1);
        let (received, _) = collect(&provider, "Anything").await;

        assert_eq!(received, chunks);
    }

    #[tokio::test]
    async fn test_error_mode() {
        let error = ProviderError::Unauthorized {
            provider: ProviderKind::Groq,
        };
        let provider = MockProvider::with_config(
            MockConfig {
                mode: MockMode::Error {
                    error: error.clone(),
                    delay_chunks: 2,
                },
                ..Default::default()
            },
            test_logger(),
        );
        let (chunks, result) = collect(&provider, "Anything").await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(result, Err(error));
    }

    #[tokio::test]
    async fn test_empty_mode() {
        let provider = MockProvider::empty(test_logger());
        let (chunks, result) = collect(&provider, "Anything").await;

        assert!(chunks.is_empty());
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_records_requests() {
        let provider = MockProvider::new(test_logger());
        let _ = collect(&provider, "one").await;
        let _ = collect(&provider, "two").await;

        let prompts: Vec<String> = provider.requests().into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["one", "two"]);
        assert_eq!(provider.request_count(), 2);
    }

    #[tokio::test]
    async fn test_generate_image() {
        let provider = MockProvider::new(test_logger());
        let image = provider.generate_image("a cat").await.unwrap();
        assert!(image.image_url.starts_with("data:image/png;base64,"));
        assert_eq!(image.description, "Mock image for: a cat");
    }

    #[test]
    fn test_chunk_splitting() {
        let provider = MockProvider::new(test_logger()).with_chunk_size(5);
        let chunks = provider.split_into_chunks("Hello, world!");

        assert_eq!(chunks, vec!["Hello", ", wor", "ld!"]);
    }
}
