//! Persisted UI preferences.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#1f6feb";
pub const DEFAULT_SECONDARY_COLOR: &str = "#0d1117";
pub const DEFAULT_ACCENT_COLOR: &str = "#f59e0b";

/// Theme color triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            accent: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

impl ThemeColors {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// UI state that survives reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub theme: ThemeColors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UiPreferences::default();
        assert!(!prefs.sidebar_collapsed);
        assert!(prefs.theme.is_default());
        assert_eq!(prefs.theme.primary, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_partial_theme_is_rejected_but_missing_theme_defaults() {
        let prefs: UiPreferences = serde_json::from_str(r#"{"sidebarCollapsed":true}"#).unwrap();
        assert!(prefs.sidebar_collapsed);
        assert!(prefs.theme.is_default());

        assert!(serde_json::from_str::<ThemeColors>(r##"{"primary":"#fff"}"##).is_err());
    }
}
