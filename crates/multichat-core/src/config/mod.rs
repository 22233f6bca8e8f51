//! Configuration for the provider adapters

mod client;
mod file;
mod memory;
mod traits;

pub use client::{
    ClientConfig, DEFAULT_CEREBRAS_ENDPOINT, DEFAULT_GEMINI_API_BASE, DEFAULT_GROQ_ENDPOINT,
};
pub use file::FileConfigProvider;
pub use memory::MemoryConfigProvider;
pub use traits::{ConfigError, ConfigProvider, ConfigResult};
