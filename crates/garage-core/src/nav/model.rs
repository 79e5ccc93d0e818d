//! Navigation menu models.

use serde::{Deserialize, Serialize};

/// A sidebar link in the static menu definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Route identifier, also the key for item-level grants.
    pub path: String,
    pub label: String,
    pub icon: String,
}

impl NavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// A labeled sidebar section. Item order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Display text and access-control key.
    pub label: String,
    pub items: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// A link as resolved for a specific role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavItem {
    pub path: String,
    pub label: String,
    pub icon: String,
    /// Advisory: present the screen without mutating actions.
    pub read_only: bool,
}

/// A sidebar section as resolved for a specific role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavGroup {
    pub label: String,
    pub read_only: bool,
    pub items: Vec<ResolvedNavItem>,
}

impl ResolvedNavGroup {
    pub fn contains_path(&self, path: &str) -> bool {
        self.items.iter().any(|item| item.path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.path.as_str()).collect()
    }
}
