//! Preferences repository implementation.
//!
//! The sidebar flag is stored as `"true"`/`"false"` under its own key and the
//! theme as a JSON object, so each can be reset independently.

use crate::storage::{LocalStorage, keys};
use garage_core::error::Result;
use garage_core::preferences::{PreferencesRepository, ThemeColors, UiPreferences};
use std::sync::Arc;

/// Preferences read from and written to [`LocalStorage`] on every call.
///
/// Nothing is cached here, so other handles on the same storage file see
/// each other's changes immediately.
#[derive(Debug, Clone)]
pub struct LocalStoragePreferencesRepository {
    storage: Arc<LocalStorage>,
}

impl LocalStoragePreferencesRepository {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    /// Runs a storage call on the blocking pool.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&LocalStorage) -> Result<T> + Send + 'static,
    {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || f(&storage)).await?
    }

    fn sidebar_flag(raw: Option<&String>) -> bool {
        raw.is_some_and(|raw| raw.trim() == "true")
    }

    /// Missing or unreadable values fall back to their defaults.
    fn parse_theme(raw: Option<String>) -> ThemeColors {
        match raw {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Stored theme is unreadable, using defaults: {}", e);
                ThemeColors::default()
            }),
            None => ThemeColors::default(),
        }
    }

    async fn read_item(&self, key: &'static str) -> Option<String> {
        self.blocking(move |storage| Ok(storage.get_item(key)))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "preference read failed");
                None
            })
    }
}

#[async_trait::async_trait]
impl PreferencesRepository for LocalStoragePreferencesRepository {
    async fn get_preferences(&self) -> Result<UiPreferences> {
        let (sidebar, theme) = self
            .blocking(|storage| {
                Ok((
                    storage.get_item(keys::SIDEBAR_COLLAPSED),
                    storage.get_item(keys::THEME),
                ))
            })
            .await?;

        Ok(UiPreferences {
            sidebar_collapsed: Self::sidebar_flag(sidebar.as_ref()),
            theme: Self::parse_theme(theme),
        })
    }

    async fn is_sidebar_collapsed(&self) -> bool {
        Self::sidebar_flag(self.read_item(keys::SIDEBAR_COLLAPSED).await.as_ref())
    }

    async fn set_sidebar_collapsed(&self, collapsed: bool) -> Result<()> {
        self.blocking(move |storage| storage.set_item(keys::SIDEBAR_COLLAPSED, collapsed.to_string()))
            .await
    }

    async fn toggle_sidebar(&self) -> Result<bool> {
        let collapsed = self
            .blocking(|storage| {
                storage.update(|items| {
                    let collapsed = !Self::sidebar_flag(items.get(keys::SIDEBAR_COLLAPSED));
                    items.insert(keys::SIDEBAR_COLLAPSED.to_string(), collapsed.to_string());
                    collapsed
                })
            })
            .await?;
        tracing::debug!(collapsed, "sidebar toggled");
        Ok(collapsed)
    }

    async fn get_theme(&self) -> ThemeColors {
        Self::parse_theme(self.read_item(keys::THEME).await)
    }

    async fn set_theme(&self, theme: ThemeColors) -> Result<()> {
        let json = serde_json::to_string(&theme)?;
        self.blocking(move |storage| storage.set_item(keys::THEME, json))
            .await
    }

    async fn reset_theme(&self) -> Result<ThemeColors> {
        let defaults = ThemeColors::default();
        self.set_theme(defaults.clone()).await?;
        tracing::debug!("theme reset to defaults");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> (Arc<LocalStorage>, LocalStoragePreferencesRepository) {
        let storage = Arc::new(LocalStorage::open(dir.path().join("ls.json")).unwrap());
        let repo = LocalStoragePreferencesRepository::new(storage.clone());
        (storage, repo)
    }

    #[tokio::test]
    async fn test_defaults_when_nothing_stored() {
        let dir = TempDir::new().unwrap();
        let (_, repo) = open(&dir);
        assert_eq!(repo.get_preferences().await.unwrap(), UiPreferences::default());
    }

    #[tokio::test]
    async fn test_toggle_persists_as_string_flag() {
        let dir = TempDir::new().unwrap();
        let (storage, repo) = open(&dir);

        assert!(repo.toggle_sidebar().await.unwrap());
        assert_eq!(storage.get_item(keys::SIDEBAR_COLLAPSED).as_deref(), Some("true"));
        assert!(!repo.toggle_sidebar().await.unwrap());
        assert!(!repo.is_sidebar_collapsed().await);
    }

    #[tokio::test]
    async fn test_toggles_from_two_handles_alternate() {
        let dir = TempDir::new().unwrap();
        let (_, first) = open(&dir);
        let (_, second) = open(&dir);

        assert!(first.toggle_sidebar().await.unwrap());
        assert!(!second.toggle_sidebar().await.unwrap());
        assert!(first.toggle_sidebar().await.unwrap());
        assert!(second.is_sidebar_collapsed().await);
    }

    #[tokio::test]
    async fn test_theme_survives_reload_and_resets() {
        let dir = TempDir::new().unwrap();
        let custom = ThemeColors {
            primary: "#ff0000".to_string(),
            secondary: "#00ff00".to_string(),
            accent: "#0000ff".to_string(),
        };

        {
            let (_, repo) = open(&dir);
            repo.set_theme(custom.clone()).await.unwrap();
            repo.set_sidebar_collapsed(true).await.unwrap();
        }

        let (_, repo) = open(&dir);
        assert_eq!(repo.get_theme().await, custom);
        assert!(repo.is_sidebar_collapsed().await);

        let reset = repo.reset_theme().await.unwrap();
        assert!(reset.is_default());
        assert!(repo.get_theme().await.is_default());
        // Reset leaves the sidebar alone.
        assert!(repo.is_sidebar_collapsed().await);
    }

    #[tokio::test]
    async fn test_unreadable_theme_falls_back() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(LocalStorage::open(dir.path().join("ls.json")).unwrap());
        storage.set_item(keys::THEME, "[1,2,3]").unwrap();
        storage.set_item(keys::SIDEBAR_COLLAPSED, "yes").unwrap();

        let repo = LocalStoragePreferencesRepository::new(storage);
        assert!(repo.get_theme().await.is_default());
        assert!(!repo.is_sidebar_collapsed().await);
    }
}
