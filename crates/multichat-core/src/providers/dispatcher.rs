//! Provider dispatch
//!
//! `ChatService` is the single entry point a chat front end talks to. It
//! picks the adapter for a model, drives the stream and enforces the
//! callback contract: chunks in order, then at most one completion, and
//! never a completion after a failure.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::logging::Logger;
use crate::{log_debug, log_error, log_info, log_warn};
use crate::types::{CompletionResult, ConversationTurn, GeneratedImage, GroundingLink, ModelId};

use super::error::ProviderResult;
use super::gemini::GeminiClient;
use super::openai_compat::OpenAiCompatClient;
use super::traits::{ImageProvider, Provider, SendOptions, StreamRequest};

/// Adapter family a model is sent through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Hosted Gemini streaming client
    FirstParty,
    /// Generic OpenAI-compatible SSE client
    OpenAiCompatible,
}

/// Pick the adapter for a model
pub fn route(model: ModelId) -> Route {
    if model.provider().is_openai_compatible() {
        Route::OpenAiCompatible
    } else {
        Route::FirstParty
    }
}

/// Web citations carried by a completion; empty when there are none
pub fn extract_grounding_links(result: &CompletionResult) -> Vec<GroundingLink> {
    result.grounding_links()
}

/// Multi-provider chat service
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct ChatService {
    first_party: Arc<dyn Provider>,
    openai_compat: Arc<dyn Provider>,
    images: Arc<dyn ImageProvider>,
    logger: Arc<dyn Logger>,
}

impl ChatService {
    /// Create a service with an explicit first-party key
    pub fn new(
        config: &ClientConfig,
        google_api_key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let gemini = GeminiClient::with_api_base(
            google_api_key,
            config.gemini_api_base.clone(),
            Arc::clone(&logger),
        );
        Self::with_gemini(config, gemini, logger)
    }

    /// Create a service whose first-party key comes from the environment
    pub fn from_env(config: &ClientConfig, logger: Arc<dyn Logger>) -> Self {
        let gemini = GeminiClient::from_env(config, Arc::clone(&logger));
        Self::with_gemini(config, gemini, logger)
    }

    fn with_gemini(config: &ClientConfig, gemini: GeminiClient, logger: Arc<dyn Logger>) -> Self {
        let gemini = Arc::new(gemini);
        let openai_compat = Arc::new(OpenAiCompatClient::new(config.clone(), Arc::clone(&logger)));
        Self::with_providers(gemini.clone(), openai_compat, gemini, logger)
    }

    /// Create a service over arbitrary adapters
    pub fn with_providers(
        first_party: Arc<dyn Provider>,
        openai_compat: Arc<dyn Provider>,
        images: Arc<dyn ImageProvider>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            first_party,
            openai_compat,
            images,
            logger,
        }
    }

    fn provider_for(&self, model: ModelId) -> &Arc<dyn Provider> {
        match route(model) {
            Route::FirstParty => &self.first_party,
            Route::OpenAiCompatible => &self.openai_compat,
        }
    }

    /// Stream a reply to `prompt` given the prior `history`
    ///
    /// `on_chunk` receives each text fragment as it arrives. `on_complete`
    /// is called once after the last chunk if the adapter produced a
    /// terminal payload. On failure neither callback fires again and the
    /// classified error is returned.
    pub async fn send_message_stream<C, D>(
        &self,
        model: ModelId,
        history: Vec<ConversationTurn>,
        prompt: &str,
        mut on_chunk: C,
        on_complete: D,
        options: SendOptions,
    ) -> ProviderResult<()>
    where
        C: FnMut(&str) + Send,
        D: FnOnce(CompletionResult) + Send,
    {
        let provider = self.provider_for(model);

        let mut options = options;
        if options.use_search && !model.supports_search() {
            log_debug!(
                self.logger,
                "[ChatService] Search grounding not available for {}, ignoring",
                model
            );
            options.use_search = false;
        }

        log_info!(
            self.logger,
            "[ChatService] send_message_stream: model={}, route={:?}, adapter={}",
            model,
            route(model),
            provider.name()
        );

        let request = StreamRequest::new(model, history, prompt).with_options(options);
        match provider.stream_chat(request, &mut on_chunk).await {
            Ok(Some(completion)) => {
                on_complete(completion);
                Ok(())
            }
            Ok(None) => {
                log_warn!(self.logger, "[ChatService] {} stream ended with no output", model);
                Ok(())
            }
            Err(e) => {
                log_error!(self.logger, "[ChatService] {} failed: {}", model, e);
                Err(e)
            }
        }
    }

    /// Generate an image from a text prompt
    pub async fn generate_image(&self, prompt: &str) -> ProviderResult<GeneratedImage> {
        self.images.generate_image(prompt).await
    }

    /// Web citations carried by a completion; empty when there are none
    pub fn extract_grounding_links(&self, result: &CompletionResult) -> Vec<GroundingLink> {
        extract_grounding_links(result)
    }
}
