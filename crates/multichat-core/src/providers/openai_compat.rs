//! Generic adapter for OpenAI-compatible chat-completions endpoints
//!
//! Serves Groq and Cerebras. The user's key travels with each request in
//! [`SendOptions::keys`](super::SendOptions), optionally routed through a
//! CORS proxy.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::logging::Logger;
use crate::types::{CompletionResult, ConversationTurn, ModelId, ProviderKind};

use super::endpoint::apply_proxy;
use super::error::{ProviderError, ProviderResult};
use super::sse::{parse_sse_line, SseLine, SseLineBuffer};
use super::traits::{ChunkSink, Provider, StreamRequest};

/// One message of a chat-completions request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl From<&ConversationTurn> for ChatMessage {
    /// Text parts are concatenated; inline images are not forwarded
    fn from(turn: &ConversationTurn) -> Self {
        Self {
            role: turn.role.openai_role().to_string(),
            content: turn.text(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub delta: ChatDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatDelta {
    pub content: Option<String>,
}

impl ChatResponse {
    fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|c| !c.is_empty())
    }
}

/// Client for OpenAI-compatible streaming endpoints
pub struct OpenAiCompatClient {
    http: reqwest::Client,
    config: ClientConfig,
    logger: Arc<dyn Logger>,
}

impl OpenAiCompatClient {
    pub fn new(config: ClientConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            logger,
        }
    }

    /// Reuse an existing HTTP client (connection pool)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Final URL for a provider, after proxy rewriting
    pub fn endpoint_for(&self, provider: ProviderKind, proxy: Option<&str>) -> String {
        apply_proxy(proxy, self.config.openai_endpoint(provider))
    }

    /// Build the request body: prior turns, then the prompt as a user message
    pub fn build_request(
        model: ModelId,
        history: &[ConversationTurn],
        prompt: &str,
    ) -> ChatRequest {
        let mut messages: Vec<ChatMessage> = history.iter().map(ChatMessage::from).collect();
        messages.push(ChatMessage::user(prompt));

        ChatRequest {
            model: model.as_str().to_string(),
            messages,
            stream: true,
        }
    }

    /// Drain an SSE body, forwarding each content delta to `on_chunk`
    ///
    /// Returns the concatenation of every forwarded delta. Content after
    /// `[DONE]` is ignored but the body is still read to the end.
    pub async fn read_stream<S, B, E>(
        &self,
        body: S,
        on_chunk: &mut ChunkSink<'_>,
    ) -> ProviderResult<String>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: Display,
    {
        futures::pin_mut!(body);

        let mut lines = SseLineBuffer::new();
        let mut full_content = String::new();
        let mut chunk_count = 0usize;
        let mut done = false;

        let mut handle_line = |line: &str, done: &mut bool, full_content: &mut String| {
            if *done {
                return;
            }
            match parse_sse_line(line) {
                SseLine::Done => *done = true,
                SseLine::Ignored => {}
                SseLine::Data(payload) => match serde_json::from_str::<ChatResponse>(payload) {
                    Ok(response) => {
                        if let Some(content) = response.content() {
                            full_content.push_str(content);
                            chunk_count += 1;
                            on_chunk(content);
                        }
                    }
                    Err(e) => {
                        self.logger
                            .debug(&format!("[OpenAI-compat] Dropping malformed record: {}", e));
                    }
                },
            }
        };

        while let Some(read) = body.next().await {
            let bytes = read.map_err(|e| {
                self.logger
                    .error(&format!("[OpenAI-compat] Stream read error: {}", e));
                ProviderError::Passthrough(e.to_string())
            })?;
            for line in lines.push(bytes.as_ref()) {
                handle_line(&line, &mut done, &mut full_content);
            }
        }
        if let Some(line) = lines.finish() {
            handle_line(&line, &mut done, &mut full_content);
        }

        self.logger.info(&format!(
            "[OpenAI-compat] Stream ended after {} chunks",
            chunk_count
        ));
        Ok(full_content)
    }
}

#[async_trait]
impl Provider for OpenAiCompatClient {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn stream_chat(
        &self,
        request: StreamRequest,
        on_chunk: &mut ChunkSink<'_>,
    ) -> ProviderResult<Option<CompletionResult>> {
        let provider = request.model.provider();
        let keys = &request.options.keys;
        let url = self.endpoint_for(provider, keys.proxy());

        self.logger.info(&format!(
            "[OpenAI-compat] stream_chat called: provider={}, model={}, endpoint={}",
            provider, request.model, url
        ));

        let api_key = keys.key_for(provider).ok_or_else(|| {
            self.logger
                .error(&format!("[OpenAI-compat] No API key for {}", provider));
            ProviderError::missing_credential(provider)
        })?;

        let body = Self::build_request(request.model, &request.history, &request.prompt);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "[OpenAI-compat] Transport error for {}: {}",
                    provider, e
                ));
                ProviderError::blocked(provider)
            })?;

        let status = response.status();
        if !status.is_success() {
            self.logger.error(&format!(
                "[OpenAI-compat] {} returned status {}",
                provider,
                status.as_u16()
            ));
            return Err(ProviderError::from_status(provider, status.as_u16()));
        }

        let full_content = self.read_stream(response.bytes_stream(), on_chunk).await?;
        Ok(Some(CompletionResult::text(full_content)))
    }
}
