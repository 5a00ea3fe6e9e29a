//! Configuration service implementation.
//!
//! Loads [`ConferenceConfig`] from `config.toml` (by default
//! `~/.config/lyg-conference/config.toml`) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use conference_core::config::ConferenceConfig;
use conference_core::error::Result;

use crate::paths::ConferencePaths;

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<ConferenceConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the platform config directory.
    pub fn new() -> Self {
        Self {
            path: ConferencePaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Load failures are logged and replaced by defaults.
    pub fn get_config(&self) -> ConferenceConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] falling back to defaults: {}", e);
            ConferenceConfig::default()
        });

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Reads the configuration file without touching the cache.
    ///
    /// A missing file yields the default configuration.
    pub fn load(&self) -> Result<ConferenceConfig> {
        let Some(path) = self.path.as_deref() else {
            tracing::debug!("[ConfigService] no config path, using defaults");
            return Ok(ConferenceConfig::default());
        };

        if !path.exists() {
            tracing::debug!("[ConfigService] {} not found, using defaults", path.display());
            return Ok(ConferenceConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConferenceConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] loaded {}", path.display());
        Ok(config)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
