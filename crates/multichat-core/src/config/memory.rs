//! In-memory configuration provider

use parking_lot::RwLock;

use super::client::ClientConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// In-memory configuration provider for testing
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<ClientConfig>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_config(&self) -> ConfigResult<ClientConfig> {
        Ok(self.config.read().clone())
    }

    fn set_config(&self, config: ClientConfig) -> ConfigResult<()> {
        *self.config.write() = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config_provider() {
        let provider = MemoryConfigProvider::new();
        assert_eq!(provider.get_config().unwrap(), ClientConfig::default());

        let custom = ClientConfig::new().with_groq_endpoint("http://127.0.0.1:1/groq");
        provider.set_config(custom.clone()).unwrap();
        assert_eq!(provider.get_config().unwrap(), custom);
    }
}
