//! Chat providers
//!
//! ## Architecture
//!
//! `ChatService` routes each model to one of two adapters:
//! - `GeminiClient`: the hosted Gemini API, with search grounding and image
//!   generation
//! - `OpenAiCompatClient`: any OpenAI-compatible chat-completions endpoint
//!   (Groq, Cerebras), with user-supplied keys and optional CORS proxy
//!
//! Both read server-sent events through the shared `SseLineBuffer` and report
//! failures as one closed `ProviderError` taxonomy.
//!
//! The `MockProvider` is kept for testing purposes.

mod dispatcher;
mod endpoint;
mod error;
mod gemini;
mod gemini_wire;
mod mock;
mod openai_compat;
mod sse;
mod traits;

// Core traits and types
pub use error::{ProviderError, ProviderResult, SUGGESTED_PROXY};
pub use traits::{ChunkSink, ImageProvider, Provider, SendOptions, StreamRequest};

// Entry point
pub use dispatcher::{extract_grounding_links, route, ChatService, Route};

// Adapters
pub use gemini::GeminiClient;
pub use gemini_wire::{
    ApiErrorBody, Candidate, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse,
    GroundingChunk, GroundingMetadata, RequestContent, ResponseContent, ResponsePart, Tool,
    WebSource,
};
pub use openai_compat::{ChatMessage, ChatRequest, ChatResponse, OpenAiCompatClient};

// Shared plumbing
pub use endpoint::apply_proxy;
pub use sse::{parse_sse_line, SseLine, SseLineBuffer};

// Mock provider for testing
pub use mock::{MockConfig, MockMode, MockProvider};
