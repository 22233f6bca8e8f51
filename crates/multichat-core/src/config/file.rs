//! File-based configuration provider (YAML)
//!
//! Lives at `~/.config/multichat/config.yaml` unless a path is given.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::client::ClientConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// File-based configuration provider
///
/// Reads and writes the endpoint configuration as YAML, caching the parsed
/// file. A missing file yields the defaults.
///
/// # Example
///
/// ```no_run
/// use multichat_core::config::{ConfigProvider, FileConfigProvider};
///
/// let provider = FileConfigProvider::user();
/// let config = provider.get_config().unwrap();
/// println!("groq endpoint: {}", config.groq_endpoint);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    cache: RwLock<Option<ClientConfig>>,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level config provider (~/.config/multichat/config.yaml)
    pub fn user() -> Self {
        // XDG config directory on Linux, ~/Library/Application Support on macOS
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        Self::new(config_dir.join("multichat").join("config.yaml"))
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<ClientConfig> {
        if !self.path.exists() {
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn save(&self, config: &ClientConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(config.clone());
        Ok(())
    }

    /// Reload config from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<ClientConfig> {
        let config = self.load()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl ConfigProvider for FileConfigProvider {
    fn get_config(&self) -> ConfigResult<ClientConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    fn set_config(&self, config: ClientConfig) -> ConfigResult<()> {
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multichat").join("config.yaml");
        let provider = FileConfigProvider::new(&path);

        let custom =
            ClientConfig::new().with_cerebras_endpoint("http://localhost:8080/v1/chat/completions");
        provider.set_config(custom.clone()).unwrap();
        assert!(provider.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("cerebras_endpoint"));

        let reopened = FileConfigProvider::new(&path);
        assert_eq!(reopened.get_config().unwrap(), custom);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "groq_endpoint: [unterminated").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert!(provider.get_config().is_err());
    }
}
