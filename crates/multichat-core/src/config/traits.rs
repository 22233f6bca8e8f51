//! Configuration provider trait

use super::client::ClientConfig;

/// Configuration provider abstraction
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: Reads from YAML file (~/.config/multichat/config.yaml)
pub trait ConfigProvider: Send + Sync {
    /// Current configuration
    fn get_config(&self) -> ConfigResult<ClientConfig>;

    /// Replace the configuration
    fn set_config(&self, config: ClientConfig) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
