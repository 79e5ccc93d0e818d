//! Unified path management for console files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/garage-console/     # Config directory
//! ├── config.toml               # Console configuration
//! ├── local_storage.json        # Persisted key/value UI state
//! └── logs/                     # Application logs
//!     └── garage-console.log.YYYY-MM-DD
//! ```
//!
//! Tests and portable installs pass a base directory to [`GaragePaths::new`]
//! instead of using the platform config directory.

use garage_core::GarageError;
use std::path::PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "garage-console";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform config directory could not be determined.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

impl From<PathError> for GarageError {
    fn from(err: PathError) -> Self {
        GarageError::config(err.to_string())
    }
}

/// Files and directories managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    LocalStorage,
    Logs,
}

impl ServiceType {
    fn relative_path(&self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::LocalStorage => "local_storage.json",
            ServiceType::Logs => "logs",
        }
    }
}

/// Resolves console paths, optionally under an explicit base directory.
#[derive(Debug, Clone, Default)]
pub struct GaragePaths {
    base_dir: Option<PathBuf>,
}

impl GaragePaths {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Root directory for all console files.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.relative_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = GaragePaths::new(Some(PathBuf::from("/tmp/garage")));
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathBuf::from("/tmp/garage/config.toml")
        );
        assert_eq!(
            paths.get_path(ServiceType::LocalStorage).unwrap(),
            PathBuf::from("/tmp/garage/local_storage.json")
        );
    }

    #[test]
    fn test_logs_under_config_dir() {
        let paths = GaragePaths::new(Some(PathBuf::from("/tmp/garage")));
        let logs = paths.get_path(ServiceType::Logs).unwrap();
        assert!(logs.ends_with("logs"));
        assert!(logs.starts_with(paths.config_dir().unwrap()));
    }
}
