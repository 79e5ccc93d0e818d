//! Preferences repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::preferences::model::{ThemeColors, UiPreferences};

/// Repository for the persisted sidebar and theme state.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn get_preferences(&self) -> Result<UiPreferences>;

    async fn is_sidebar_collapsed(&self) -> bool;

    async fn set_sidebar_collapsed(&self, collapsed: bool) -> Result<()>;

    /// Flips the sidebar state and returns the new value.
    async fn toggle_sidebar(&self) -> Result<bool>;

    async fn get_theme(&self) -> ThemeColors;

    async fn set_theme(&self, theme: ThemeColors) -> Result<()>;

    /// Restores the default colors and returns them.
    async fn reset_theme(&self) -> Result<ThemeColors>;
}
