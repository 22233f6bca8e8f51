//! Gemini REST request and response shapes
//!
//! Only the fields this crate reads are modelled; everything else in a
//! response is ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::types::{ConversationTurn, GroundingLink, InlineData, MessagePart, Role};

/// One entry of `contents` in a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub parts: Vec<MessagePart>,
}

impl From<ConversationTurn> for RequestContent {
    fn from(turn: ConversationTurn) -> Self {
        Self {
            role: Some(turn.role),
            parts: turn.parts,
        }
    }
}

/// Marker for the search-grounding tool; serializes as `{}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch::default(),
        }
    }
}

/// Body of `generateContent` / `streamGenerateContent`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

/// A response, or one fragment of a streamed response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part; text, inline data, or something this crate skips
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    /// Set on reasoning summaries, which are not answer text
    #[serde(default)]
    pub thought: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
    #[serde(default)]
    pub web_search_queries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated answer text of the first candidate; empty if absent
    pub fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter(|p| p.thought != Some(true))
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// First inline payload of the first candidate
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.first_parts().iter().find_map(|p| p.inline_data.as_ref())
    }

    /// Web citations from the first candidate's grounding metadata
    ///
    /// Missing metadata yields an empty list; chunks without a uri are
    /// skipped.
    pub fn grounding_links(&self) -> Vec<GroundingLink> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.as_ref()?;
                        Some(GroundingLink::new(uri.clone(), web.title.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Error envelope returned by the Gemini API on failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    /// Whether the platform says the key is unknown or invalid
    pub fn is_credential_problem(&self) -> bool {
        self.status == "NOT_FOUND"
            || self.details.iter().any(|d| {
                d.get("reason").and_then(|r| r.as_str()) == Some("API_KEY_INVALID")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![
                ConversationTurn::model("Earlier answer").into(),
                RequestContent {
                    role: Some(Role::User),
                    parts: vec![MessagePart::text("Hi"), MessagePart::image("image/png", "AAA")],
                },
            ],
            tools: Some(vec![Tool::google_search()]),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "contents": [
                    { "role": "model", "parts": [{ "text": "Earlier answer" }] },
                    { "role": "user", "parts": [
                        { "text": "Hi" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAA" } }
                    ]}
                ],
                "tools": [{ "googleSearch": {} }]
            })
        );
    }

    #[test]
    fn test_request_without_tools_omits_field() {
        let request = GenerateContentRequest {
            contents: vec![],
            tools: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("tools"));
    }

    #[test]
    fn test_response_text_skips_thoughts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [
                    { "text": "thinking...", "thought": true },
                    { "text": "Hello " },
                    { "text": "world" }
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "Hello world");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "usageMetadata": { "totalTokenCount": 3 } })).unwrap();
        assert_eq!(response.text(), "");
        assert!(response.grounding_links().is_empty());
        assert!(response.inline_data().is_none());
    }

    #[test]
    fn test_grounding_links() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Answer" }] },
                "groundingMetadata": {
                    "webSearchQueries": ["rust async"],
                    "groundingChunks": [
                        { "web": { "uri": "https://a.example", "title": "A" } },
                        { "web": { "uri": "https://b.example" } },
                        { "retrievedContext": {} },
                        { "web": { "title": "no uri" } }
                    ]
                }
            }]
        }))
        .unwrap();

        let links = response.grounding_links();
        assert_eq!(
            links,
            vec![
                GroundingLink::new("https://a.example", Some("A".to_string())),
                GroundingLink::new("https://b.example", None),
            ]
        );
        assert_eq!(links[1].title, "https://b.example");
    }

    #[test]
    fn test_error_envelope() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{ "@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "API_KEY_INVALID" }]
            }
        }))
        .unwrap();
        assert!(envelope.error.is_credential_problem());

        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" }
        }))
        .unwrap();
        assert!(!envelope.error.is_credential_problem());
    }
}
