//! Console context.
//!
//! `ConsoleContext` is the object pages receive instead of reaching for
//! globals: the UI store, the route guard (and through it the navigation
//! resolver), the auth session and the preferences repository.

use garage_core::auth::{AuthSession, GuardDecision, ReturnTargetStore, RouteGuard};
use garage_core::config::ConsoleConfig;
use garage_core::error::Result;
use garage_core::nav::{NavigationResolver, ResolvedNavGroup};
use garage_core::preferences::PreferencesRepository;
use garage_core::ui::UiStore;
use garage_infrastructure::{
    ConfigService, GaragePaths, LocalStorage, LocalStorageAuthSession,
    LocalStoragePreferencesRepository, LocalStorageReturnTarget, ServiceType,
};
use serde::Serialize;
use std::sync::Arc;

/// Where the host should go after a flow completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum Navigation {
    Stay,
    To(String),
}

#[derive(Clone)]
pub struct ConsoleContext {
    ui: UiStore,
    guard: Arc<RouteGuard>,
    session: Arc<dyn AuthSession>,
    preferences: Arc<dyn PreferencesRepository>,
    config: ConsoleConfig,
}

impl ConsoleContext {
    /// Builds a context from already-constructed adapters.
    ///
    /// Fails only when the configured navigation policies are invalid.
    pub fn new(
        config: ConsoleConfig,
        session: Arc<dyn AuthSession>,
        preferences: Arc<dyn PreferencesRepository>,
    ) -> Result<Self> {
        let table = config.navigation.policy_table()?;
        let resolver = NavigationResolver::with_table(table);
        let guard = RouteGuard::new(resolver, config.routes.clone());

        Ok(Self {
            ui: UiStore::new(config.ui.store_config()),
            guard: Arc::new(guard),
            session,
            preferences,
            config,
        })
    }

    /// Keeps the post-login destination in `store` instead of in memory.
    pub fn with_return_targets(mut self, store: Arc<dyn ReturnTargetStore>) -> Self {
        let guard = RouteGuard::new(self.guard.resolver().clone(), self.config.routes.clone())
            .with_return_targets(store);
        self.guard = Arc::new(guard);
        self
    }

    /// Opens the file-backed context rooted at `paths`.
    ///
    /// Session, preferences and return target all live in the same storage
    /// file, so separate runs continue each other's flows.
    pub fn open(paths: &GaragePaths) -> Result<Self> {
        let config = ConfigService::new(paths.clone()).load()?;

        let storage = Arc::new(LocalStorage::open(
            paths.get_path(ServiceType::LocalStorage)?,
        )?);
        let session = Arc::new(LocalStorageAuthSession::new(storage.clone()));
        let preferences = Arc::new(LocalStoragePreferencesRepository::new(storage.clone()));
        let return_targets = Arc::new(LocalStorageReturnTarget::new(storage));

        tracing::debug!(
            login = %config.routes.login,
            toast_ttl_ms = config.ui.toast_ttl_ms,
            "console context opened"
        );
        Ok(Self::new(config, session, preferences)?.with_return_targets(return_targets))
    }

    pub fn ui(&self) -> &UiStore {
        &self.ui
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn resolver(&self) -> &NavigationResolver {
        self.guard.resolver()
    }

    pub fn session(&self) -> &Arc<dyn AuthSession> {
        &self.session
    }

    pub fn preferences(&self) -> &Arc<dyn PreferencesRepository> {
        &self.preferences
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Guards a navigation to `path` using the persisted preferences.
    pub async fn navigate(&self, path: &str) -> Result<GuardDecision> {
        let preferences = self.preferences.get_preferences().await?;
        Ok(self.guard.check(self.session.as_ref(), path, &preferences))
    }

    /// Sidebar for the signed-in user's role claim.
    pub fn sidebar(&self) -> Vec<ResolvedNavGroup> {
        self.resolver().nav(self.session.role_claim().as_deref())
    }

    /// Advisory check for whether the current user's menu offers `path`.
    pub fn can_access(&self, path: &str) -> bool {
        self.resolver()
            .can_access(self.session.role_claim().as_deref(), path)
    }

    /// Continues to the location remembered by the last login redirect.
    pub fn after_login(&self) -> Navigation {
        Navigation::To(self.guard.take_return_target())
    }
}

impl std::fmt::Debug for ConsoleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleContext")
            .field("ui", &self.ui)
            .field("guard", &self.guard)
            .field("authenticated", &self.session.is_authenticated())
            .field("config", &self.config)
            .finish()
    }
}
