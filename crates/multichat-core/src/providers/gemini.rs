//! First-party streaming adapter for the Gemini REST API
//!
//! Text models stream through `streamGenerateContent?alt=sse`; the image
//! model answers through a single `generateContent` call.

use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;

use crate::config::{ClientConfig, DEFAULT_GEMINI_API_BASE};
use crate::credentials::ambient_api_key;
use crate::logging::Logger;
use crate::types::{
    CompletionResult, ConversationTurn, GeneratedImage, MessagePart, ModelId, ProviderKind, Role,
};

use super::error::{ProviderError, ProviderResult};
use super::gemini_wire::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, RequestContent, Tool,
};
use super::sse::{parse_sse_line, SseLine, SseLineBuffer};
use super::traits::{ChunkSink, ImageProvider, Provider, StreamRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the hosted Gemini API
///
/// The API key is injected at construction; the client never reads process
/// state on its own. It holds no per-request state and can be shared.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    logger: Arc<dyn Logger>,
}

impl GeminiClient {
    /// Create a client with an explicit key against the production API
    pub fn new(api_key: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_api_base(api_key, DEFAULT_GEMINI_API_BASE, logger)
    }

    /// Create a client against a custom base URL
    pub fn with_api_base(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into().trim().to_string(),
            logger,
        }
    }

    /// Create a client from configuration, reading the key from the
    /// environment once
    pub fn from_env(config: &ClientConfig, logger: Arc<dyn Logger>) -> Self {
        let api_key = ambient_api_key(ProviderKind::Google).unwrap_or_default();
        Self::with_api_base(api_key, config.gemini_api_base.clone(), logger)
    }

    /// Reuse an existing HTTP client (connection pool)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn model_url(&self, model: ModelId, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.api_base, model.as_str(), method)
    }

    /// Build the request body: prior turns, then the prompt as a user turn
    pub fn build_request(
        history: Vec<ConversationTurn>,
        prompt: &str,
        use_search: bool,
    ) -> GenerateContentRequest {
        let mut contents: Vec<RequestContent> =
            history.into_iter().map(RequestContent::from).collect();
        contents.push(RequestContent {
            role: Some(Role::User),
            parts: vec![MessagePart::text(prompt)],
        });

        GenerateContentRequest {
            contents,
            tools: use_search.then(|| vec![Tool::google_search()]),
        }
    }

    async fn post(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> ProviderResult<reqwest::Response> {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("[Gemini] Transport error: {}", e));
                ProviderError::Passthrough(e.to_string())
            })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(self.classify_failure(status, &body))
    }

    /// Map a failed response to the error taxonomy
    fn classify_failure(&self, status: u16, body: &str) -> ProviderError {
        let api_error = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error)
            .ok();

        self.logger.error(&format!(
            "[Gemini] Request failed with status {}: {}",
            status,
            api_error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or(body)
        ));

        let credential_problem =
            status == 404 || api_error.as_ref().is_some_and(|e| e.is_credential_problem());
        if credential_problem {
            return ProviderError::CredentialNotFound;
        }

        match api_error {
            Some(e) if !e.message.is_empty() => ProviderError::Passthrough(e.message),
            _ => ProviderError::Passthrough(format!(
                "Gemini request failed with status {}",
                status
            )),
        }
    }

    /// One-shot image generation
    ///
    /// Every failure is logged and returned as `Passthrough`, unclassified.
    pub async fn generate_image(&self, prompt: &str) -> ProviderResult<GeneratedImage> {
        self.generate_image_inner(prompt).await.map_err(|e| {
            self.logger
                .error(&format!("[Gemini] Image generation failed: {}", e));
            match e {
                ProviderError::Passthrough(_) => e,
                other => ProviderError::Passthrough(other.to_string()),
            }
        })
    }

    async fn generate_image_inner(&self, prompt: &str) -> ProviderResult<GeneratedImage> {
        let model = ModelId::GeminiImage;
        self.logger
            .info(&format!("[Gemini] generate_image called: model={}", model));

        if !self.has_api_key() {
            return Err(ProviderError::CredentialNotFound);
        }

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: None,
                parts: vec![MessagePart::text(prompt)],
            }],
            tools: None,
        };
        let response = self.post(&self.model_url(model, "generateContent"), &body).await?;
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Passthrough(e.to_string()))?;

        if response.candidates.is_empty() {
            return Err(ProviderError::passthrough("Image model returned no candidates"));
        }

        // The data URI is always labelled PNG, matching what the model returns
        let image_url = response
            .inline_data()
            .map(|d| format!("data:image/png;base64,{}", d.data))
            .unwrap_or_default();

        Ok(GeneratedImage {
            image_url,
            description: response.text(),
        })
    }
}

#[async_trait]
impl Provider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn stream_chat(
        &self,
        request: StreamRequest,
        on_chunk: &mut ChunkSink<'_>,
    ) -> ProviderResult<Option<CompletionResult>> {
        let StreamRequest {
            model,
            history,
            prompt,
            options,
        } = request;

        self.logger.info(&format!(
            "[Gemini] stream_chat called: model={}, turns={}, search={}",
            model,
            history.len(),
            options.use_search
        ));

        if !self.has_api_key() {
            self.logger.error("[Gemini] No API key configured");
            return Err(ProviderError::CredentialNotFound);
        }

        let body = Self::build_request(history, &prompt, options.use_search);
        let url = format!("{}?alt=sse", self.model_url(model, "streamGenerateContent"));
        let response = self.post(&url, &body).await?;

        let mut stream = response.bytes_stream();
        let mut lines = SseLineBuffer::new();
        let mut last: Option<GenerateContentResponse> = None;
        let mut fragments = 0usize;

        let mut handle_line = |line: &str, last: &mut Option<GenerateContentResponse>| {
            let payload = match parse_sse_line(line) {
                SseLine::Data(payload) => payload,
                SseLine::Done | SseLine::Ignored => return,
            };
            match serde_json::from_str::<GenerateContentResponse>(payload) {
                Ok(fragment) => {
                    fragments += 1;
                    on_chunk(&fragment.text());
                    *last = Some(fragment);
                }
                Err(e) => {
                    self.logger
                        .debug(&format!("[Gemini] Dropping malformed record: {}", e));
                }
            }
        };

        while let Some(read) = stream.next().await {
            let bytes = read.map_err(|e| {
                self.logger
                    .error(&format!("[Gemini] Stream read error: {}", e));
                ProviderError::Passthrough(e.to_string())
            })?;
            for line in lines.push(&bytes) {
                handle_line(&line, &mut last);
            }
        }
        if let Some(line) = lines.finish() {
            handle_line(&line, &mut last);
        }

        self.logger
            .info(&format!("[Gemini] Stream ended after {} fragments", fragments));

        Ok(last.map(CompletionResult::FirstParty))
    }
}

#[async_trait]
impl ImageProvider for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> ProviderResult<GeneratedImage> {
        GeminiClient::generate_image(self, prompt).await
    }
}
