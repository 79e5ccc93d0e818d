//! File-backed adapters for the Garage Console core.
//!
//! - `paths`: where console files live
//! - `storage`: the `localStorage`-style key/value file
//! - `auth_session`: [`AuthSession`](garage_core::auth::AuthSession) over stored credentials
//! - `preferences_repository`: sidebar and theme persistence
//! - `return_target`: the post-login destination
//! - `config_service`: `config.toml` loading

pub mod auth_session;
pub mod config_service;
pub mod paths;
pub mod preferences_repository;
pub mod return_target;
pub mod storage;

pub use auth_session::LocalStorageAuthSession;
pub use config_service::ConfigService;
pub use paths::{GaragePaths, PathError, ServiceType};
pub use preferences_repository::LocalStoragePreferencesRepository;
pub use return_target::LocalStorageReturnTarget;
pub use storage::LocalStorage;
