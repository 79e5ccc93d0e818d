//! Console configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section has
//! defaults so a missing or partial file still yields a working console.

use crate::error::{GarageError, Result};
use crate::nav::{PolicyTable, Role, RoleAccessPolicy};
use crate::ui::{DEFAULT_TOAST_TTL, UiStoreConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiSettings {
    /// Toast lifetime in milliseconds.
    pub toast_ttl_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_ttl_ms: DEFAULT_TOAST_TTL.as_millis() as u64,
        }
    }
}

impl UiSettings {
    pub fn store_config(&self) -> UiStoreConfig {
        UiStoreConfig {
            toast_ttl: Duration::from_millis(self.toast_ttl_ms),
        }
    }
}

/// Well-known routes the guard redirects between.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RouteConfig {
    pub login: String,
    pub home: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            home: "/".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub log_to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: true,
        }
    }
}

/// Overrides applied on top of the built-in role policies.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationSettings {
    pub fallback_role: Option<String>,
    /// Keyed by role name (case-insensitive).
    pub policies: BTreeMap<String, RoleAccessPolicy>,
}

impl NavigationSettings {
    /// Builds the policy table: defaults, then per-role replacements, then the fallback.
    pub fn policy_table(&self) -> Result<PolicyTable> {
        let mut table = PolicyTable::default();

        for (name, policy) in &self.policies {
            let role = Role::from_claim(Some(name));
            if !role.is_known() {
                return Err(GarageError::config(format!(
                    "unknown role '{}' in navigation policies",
                    name
                )));
            }
            table = table.with_policy(role, policy.clone())?;
        }

        if let Some(name) = &self.fallback_role {
            let role = Role::from_claim(Some(name));
            if !role.is_known() {
                return Err(GarageError::config(format!(
                    "unknown fallback role '{}'",
                    name
                )));
            }
            table = table.with_fallback(role)?;
        }

        Ok(table)
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub ui: UiSettings,
    pub routes: RouteConfig,
    pub logging: LoggingSettings,
    pub navigation: NavigationSettings,
}
