//! Multichat Core
//!
//! Runtime-agnostic multi-provider chat streaming.
//! One callback contract over the hosted Gemini API and OpenAI-compatible
//! inference endpoints (Groq, Cerebras), plus the credential record that
//! carries the user's keys.
//!
//! ## Streaming a reply
//!
//! ```rust,ignore
//! use multichat_core::{ChatService, ClientConfig, ModelId, SendOptions, TracingLogger};
//!
//! let service = ChatService::from_env(
//!     &ClientConfig::default(),
//!     Arc::new(TracingLogger::with_component("chat")),
//! );
//!
//! service
//!     .send_message_stream(
//!         ModelId::Gemini3Flash,
//!         history,
//!         "What happened in the news today?",
//!         |chunk| print!("{}", chunk),
//!         |done| links = service.extract_grounding_links(&done),
//!         SendOptions::new().with_search(true),
//!     )
//!     .await?;
//! ```
//!
//! ## Credentials
//!
//! Third-party keys are not read from the environment. They live in a
//! `CredentialStore` over any `KeyValueStore` and are passed into each send:
//!
//! ```rust,ignore
//! let store = CredentialStore::open(Arc::new(FileKeyValueStore::user()), logger);
//! let options = SendOptions::new().with_keys(store.keys());
//! ```

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use types::{
    CompletionResult, ConversationTurn, GeneratedImage, GroundingLink, InlineData, MessagePart,
    ModelId, ModelInfo, ProviderKind, Role,
};

pub use logging::{init_tracing, Logger, NoOpLogger, TracingLogger};

pub use config::{ClientConfig, ConfigProvider, FileConfigProvider, MemoryConfigProvider};

pub use storage::{
    FileKeyValueStore, KeychainKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError,
};

pub use credentials::{CredentialStore, ProviderKeys};

pub use providers::{
    extract_grounding_links, route, ChatService, GeminiClient, OpenAiCompatClient,
    ProviderError, ProviderResult, Route, SendOptions, SUGGESTED_PROXY,
};
