//! Composition root for the console binary.

use anyhow::{Context, Result};
use garage_application::ConsoleContext;
use garage_core::config::ConsoleConfig;
use garage_infrastructure::{
    GaragePaths, LocalStorage, LocalStorageAuthSession, LocalStoragePreferencesRepository,
    LocalStorageReturnTarget, ServiceType,
};
use std::sync::Arc;

pub struct ConsoleApp {
    pub ctx: ConsoleContext,
    /// Concrete session, for the `login` command which writes credentials.
    pub session: Arc<LocalStorageAuthSession>,
}

impl ConsoleApp {
    pub fn bootstrap(paths: &GaragePaths, config: ConsoleConfig) -> Result<Self> {
        let storage_path = paths.get_path(ServiceType::LocalStorage)?;
        let storage = Arc::new(
            LocalStorage::open(&storage_path)
                .with_context(|| format!("Failed to open {}", storage_path.display()))?,
        );

        let session = Arc::new(LocalStorageAuthSession::new(storage.clone()));
        let preferences = Arc::new(LocalStoragePreferencesRepository::new(storage.clone()));
        let return_targets = Arc::new(LocalStorageReturnTarget::new(storage));

        let ctx = ConsoleContext::new(config, session.clone(), preferences)
            .context("Invalid navigation policy configuration")?
            .with_return_targets(return_targets);

        tracing::info!(
            storage = %storage_path.display(),
            "[Bootstrap] console ready"
        );
        Ok(Self { ctx, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_core::auth::{AuthSession, AuthUser};
    use tempfile::TempDir;

    #[test]
    fn test_bootstrap_shares_storage_between_session_and_context() {
        let dir = TempDir::new().unwrap();
        let paths = GaragePaths::new(Some(dir.path().to_path_buf()));
        let app = ConsoleApp::bootstrap(&paths, ConsoleConfig::default()).unwrap();

        app.session
            .sign_in("tok", &AuthUser::new("Efua", Some("tech")))
            .unwrap();
        assert!(app.ctx.session().is_authenticated());
        assert!(app.ctx.can_access("/jobcards"));
        assert!(!app.ctx.can_access("/inventory"));
    }

    #[tokio::test]
    async fn test_guard_and_login_in_separate_runs() {
        let dir = TempDir::new().unwrap();
        let paths = GaragePaths::new(Some(dir.path().to_path_buf()));

        let guard_run = ConsoleApp::bootstrap(&paths, ConsoleConfig::default()).unwrap();
        assert!(guard_run.ctx.navigate("/invoices").await.unwrap().is_redirect());
        drop(guard_run);

        let login_run = ConsoleApp::bootstrap(&paths, ConsoleConfig::default()).unwrap();
        login_run
            .session
            .sign_in("tok", &AuthUser::new("Ama", Some("manager")))
            .unwrap();
        assert_eq!(
            login_run.ctx.after_login(),
            garage_application::Navigation::To("/invoices".to_string())
        );
    }
}
