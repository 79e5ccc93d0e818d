//! Error types for the Garage Console core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the console crates.
///
/// The orchestration store and the navigation resolver never surface errors to
/// callers; this type covers configuration, policy validation and the storage
/// layer behind the persisted UI state.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GarageError {
    /// File system failure while reading or writing console files
    #[error("IO error: {message}")]
    Io { message: String },

    /// A stored or configured document could not be parsed or written
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Invalid or unreadable `config.toml`
    #[error("Configuration error: {0}")]
    Config(String),

    /// Role policy table is incomplete or inconsistent
    #[error("Policy error: {0}")]
    Policy(String),

    /// Local storage file is corrupt or could not be locked
    #[error("Storage error: {0}")]
    Storage(String),

    /// A blocking storage task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

impl GarageError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn policy(message: impl Into<String>) -> Self {
        Self::Policy(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_policy(&self) -> bool {
        matches!(self, Self::Policy(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io { .. })
    }

    fn serialization(format: &str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format: format.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for GarageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GarageError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<toml::de::Error> for GarageError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

impl From<toml::ser::Error> for GarageError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

impl From<tokio::task::JoinError> for GarageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

/// A type alias for `Result<T, GarageError>`.
pub type Result<T> = std::result::Result<T, GarageError>;
