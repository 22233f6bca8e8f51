use serde_json::{json, Value};
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use multichat_core::ClientConfig;

/// Mock server standing in for both upstream APIs
pub struct ProviderMockServer {
    server: MockServer,
}

impl ProviderMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Client configuration pointing every endpoint at this server
    pub fn config(&self) -> ClientConfig {
        let uri = self.server.uri();
        ClientConfig::default()
            .with_gemini_api_base(uri.clone())
            .with_groq_endpoint(format!("{}/openai/v1/chat/completions", uri))
            .with_cerebras_endpoint(format!("{}/v1/chat/completions", uri))
    }

    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or_default()
    }

    /// Mock a streamed Gemini reply made of `fragments`
    pub async fn mock_gemini_stream(&self, model: &str, fragments: &[Value]) {
        let body: String = fragments
            .iter()
            .map(|f| format!("data: {}\r\n\r\n", f))
            .collect();

        Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{}:streamGenerateContent", model)))
            .and(query_param("alt", "sse"))
            .and(header("x-goog-api-key", "test-google-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a streamed chat-completions reply made of `deltas`
    pub async fn mock_openai_stream(&self, endpoint_path: &str, key: &str, deltas: &[&str]) {
        let mut body: String = deltas
            .iter()
            .map(|d| format!("data: {}\n\n", json!({ "choices": [{ "delta": { "content": d } }] })))
            .collect();
        body.push_str("data: [DONE]\n\n");

        Mock::given(method("POST"))
            .and(path(endpoint_path))
            .and(header("authorization", format!("Bearer {}", key).as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a bare status on every POST
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// One Gemini response fragment carrying `text`
pub fn gemini_fragment(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
}
