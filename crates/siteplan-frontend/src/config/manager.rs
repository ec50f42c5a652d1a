//! Loading and saving the RON configuration file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::AppConfig;

/// Shared configuration manager type
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Owns the application configuration and its file location
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
    dirty: bool,
}

impl ConfigManager {
    /// Load from the OS config directory, falling back to defaults
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Load from `config_path`, falling back to defaults
    pub fn with_path(config_path: PathBuf) -> Self {
        let config = Self::load_from_path(&config_path).unwrap_or_else(|| {
            tracing::info!("No config file found, using defaults");
            AppConfig::new()
        });

        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("siteplan")
            .join("config.ron")
    }

    /// Read a config file; a missing file is not an error
    pub fn load(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e.to_string())),
        };
        ron::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    fn load_from_path(path: &Path) -> Option<AppConfig> {
        match Self::load(path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {:?}", path);
                Some(config)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Mutable access; marks the configuration dirty
    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.dirty = true;
        &mut self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the configuration if it changed
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(&self.config_path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {:?}", self.config_path);
        self.dirty = false;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::new()))
}
