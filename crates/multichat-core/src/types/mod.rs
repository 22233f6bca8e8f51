//! Core types for chat interactions
//!
//! This module contains the value types shared by the dispatcher and the
//! provider adapters. All of them are request-scoped.

mod message;
mod model;
mod stream;

pub use message::{ConversationTurn, InlineData, MessagePart, Role};
pub use model::{ModelId, ModelInfo, ProviderKind, UnknownModel};
pub use stream::{CompletionResult, GeneratedImage, GroundingLink};
