//! Configuration service implementation.
//!
//! Loads [`ConsoleConfig`] from `config.toml`, writing the defaults when the
//! file does not exist yet.

use crate::paths::{GaragePaths, ServiceType};
use garage_core::config::ConsoleConfig;
use garage_core::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Loads and caches the console configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: GaragePaths,
    /// Cached configuration; `None` until first load or after invalidation.
    config: Arc<RwLock<Option<ConsoleConfig>>>,
}

impl ConfigService {
    /// The configuration is loaded lazily on first access.
    pub fn new(paths: GaragePaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Loads the configuration, returning errors instead of falling back.
    ///
    /// The navigation overrides are validated here so a bad policy section is
    /// reported at startup rather than when the sidebar is first resolved.
    pub fn load(&self) -> Result<ConsoleConfig> {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let loaded = self.load_from_file()?;
        loaded.navigation.policy_table()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }

    /// Gets the configuration, using defaults if it cannot be loaded.
    pub fn get_config(&self) -> ConsoleConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                ConsoleConfig::default()
            }
        }
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        Ok(self.paths.get_path(ServiceType::Config)?)
    }

    fn load_from_file(&self) -> Result<ConsoleConfig> {
        let path = self.config_path()?;

        if !path.exists() {
            let defaults = ConsoleConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, toml::to_string_pretty(&defaults)?)?;
            tracing::info!(path = %path.display(), "created default config");
            return Ok(defaults);
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
