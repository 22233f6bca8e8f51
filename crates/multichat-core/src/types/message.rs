//! Conversation turn types

use serde::{Deserialize, Serialize};

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Role name used by OpenAI-compatible chat APIs
    pub fn openai_role(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

/// Base64 image payload carried inline in a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

impl InlineData {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URI
    ///
    /// Returns `None` for anything that is not a base64 data URI.
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix("data:")?;
        let (mime_type, data) = rest.split_once(";base64,")?;
        if mime_type.is_empty() {
            return None;
        }
        Some(Self::new(mime_type, data))
    }

    /// Render as a `data:` URI
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A single part of a turn: text or an inline image
///
/// Serializes to the Gemini part shape (`{"text": ..}` or
/// `{"inlineData": {..}}`), so parts can be sent to the first-party API
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessagePart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        MessagePart::Text { text: text.into() }
    }

    /// Create an inline image part
    pub fn image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        MessagePart::InlineData {
            inline_data: InlineData::new(mime_type, data),
        }
    }

    /// Text of this part, if it is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessagePart::Text { text } => Some(text),
            MessagePart::InlineData { .. } => None,
        }
    }
}

/// One prior turn of the conversation
///
/// Turns are owned by the caller and passed by value into each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub parts: Vec<MessagePart>,
}

impl ConversationTurn {
    /// Create a turn from explicit parts
    pub fn new(role: Role, parts: Vec<MessagePart>) -> Self {
        Self { role, parts }
    }

    /// Create a text-only user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![MessagePart::text(text)])
    }

    /// Create a text-only model turn
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![MessagePart::text(text)])
    }

    /// Create a user turn carrying text and an attached image data URI
    ///
    /// An attachment that is not a base64 data URI is dropped.
    pub fn user_with_image(text: impl Into<String>, image_data_uri: &str) -> Self {
        let mut parts = vec![MessagePart::text(text)];
        if let Some(inline_data) = InlineData::from_data_uri(image_data_uri) {
            parts.push(MessagePart::InlineData { inline_data });
        }
        Self::new(Role::User, parts)
    }

    /// Concatenation of all text parts; images are skipped
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(MessagePart::as_text).collect()
    }
}
