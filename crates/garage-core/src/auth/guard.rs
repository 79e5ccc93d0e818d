//! Route guard.
//!
//! Decides, once per navigation, whether to send the user to the login route
//! or to render the application frame. Only menu visibility is derived from
//! the role here; the guard does not check per-path permissions.

use super::return_target::{MemoryReturnTarget, ReturnTargetStore};
use super::session::{AuthSession, AuthUser};
use crate::config::RouteConfig;
use crate::nav::{NavigationResolver, ResolvedNavGroup, Role};
use crate::preferences::{ThemeColors, UiPreferences};
use serde::Serialize;
use std::sync::Arc;

/// Everything the application shell renders around a protected screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFrame {
    pub user: Option<AuthUser>,
    pub role: Role,
    pub sidebar: Vec<ResolvedNavGroup>,
    pub sidebar_collapsed: bool,
    pub theme: ThemeColors,
    /// The requested screen rendered inside the frame.
    pub content_path: String,
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuardDecision {
    RedirectToLogin { login_route: String, from: String },
    Render(AppFrame),
}

impl GuardDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::RedirectToLogin { .. })
    }

    pub fn frame(&self) -> Option<&AppFrame> {
        match self {
            GuardDecision::Render(frame) => Some(frame),
            GuardDecision::RedirectToLogin { .. } => None,
        }
    }
}

/// Guards protected routes behind an access token.
#[derive(Debug)]
pub struct RouteGuard {
    resolver: NavigationResolver,
    routes: RouteConfig,
    /// Location to return to after login.
    return_to: Arc<dyn ReturnTargetStore>,
}

impl RouteGuard {
    /// Creates a guard that remembers the return target in memory.
    pub fn new(resolver: NavigationResolver, routes: RouteConfig) -> Self {
        Self {
            resolver,
            routes,
            return_to: Arc::new(MemoryReturnTarget::default()),
        }
    }

    /// Replaces where the return target is kept.
    pub fn with_return_targets(mut self, store: Arc<dyn ReturnTargetStore>) -> Self {
        self.return_to = store;
        self
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.routes
    }

    pub fn resolver(&self) -> &NavigationResolver {
        &self.resolver
    }

    /// Guards a navigation to `requested`.
    pub fn check(
        &self,
        session: &dyn AuthSession,
        requested: &str,
        preferences: &UiPreferences,
    ) -> GuardDecision {
        if !session.is_authenticated() {
            if requested != self.routes.login {
                if let Err(e) = self.return_to.remember(requested) {
                    tracing::warn!(requested, error = %e, "failed to remember return target");
                }
            }
            tracing::debug!(requested, "unauthenticated navigation, redirecting to login");
            return GuardDecision::RedirectToLogin {
                login_route: self.routes.login.clone(),
                from: requested.to_string(),
            };
        }

        let user = session.user();
        let role_claim = user.as_ref().and_then(|u| u.role.as_deref());
        let role = Role::from_claim(role_claim);
        let sidebar = self.resolver.nav(role_claim);

        GuardDecision::Render(AppFrame {
            user,
            role,
            sidebar,
            sidebar_collapsed: preferences.sidebar_collapsed,
            theme: preferences.theme.clone(),
            content_path: requested.to_string(),
        })
    }

    /// Where to go after a successful login. Clears the remembered location.
    ///
    /// An unreadable store sends the user home.
    pub fn take_return_target(&self) -> String {
        self.return_to
            .take()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read return target");
                None
            })
            .unwrap_or_else(|| self.routes.home.clone())
    }

    pub fn peek_return_target(&self) -> Option<String> {
        self.return_to.peek().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read return target");
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::StaticAuthSession;
    use crate::error::GarageError;
    use crate::nav::groups;

    fn guard() -> RouteGuard {
        RouteGuard::new(NavigationResolver::default(), RouteConfig::default())
    }

    #[test]
    fn test_redirects_without_token() {
        let guard = guard();
        let session = StaticAuthSession::signed_out();

        let decision = guard.check(&session, "/invoices", &UiPreferences::default());
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                login_route: "/login".to_string(),
                from: "/invoices".to_string(),
            }
        );
        assert_eq!(guard.take_return_target(), "/invoices");
        assert_eq!(guard.take_return_target(), "/");
    }

    #[test]
    fn test_return_target_is_single_slot() {
        let guard = guard();
        let session = StaticAuthSession::signed_out();
        let prefs = UiPreferences::default();

        guard.check(&session, "/vehicles", &prefs);
        guard.check(&session, "/reports", &prefs);

        assert_eq!(guard.take_return_target(), "/reports");
        assert_eq!(guard.take_return_target(), "/");
    }

    #[test]
    fn test_login_route_is_not_remembered() {
        let guard = guard();
        let session = StaticAuthSession::signed_out();
        let prefs = UiPreferences::default();

        guard.check(&session, "/jobcards", &prefs);
        guard.check(&session, "/login", &prefs);

        assert_eq!(guard.peek_return_target().as_deref(), Some("/jobcards"));
    }

    #[test]
    fn test_renders_frame_for_signed_in_user() {
        let guard = guard();
        let session = StaticAuthSession::signed_in("tok", AuthUser::new("Ama", Some("cashier")));
        let prefs = UiPreferences {
            sidebar_collapsed: true,
            ..Default::default()
        };

        let decision = guard.check(&session, "/finance", &prefs);
        let frame = decision.frame().unwrap();

        assert_eq!(frame.role, Role::Cashier);
        assert!(frame.sidebar_collapsed);
        assert_eq!(frame.content_path, "/finance");
        let labels: Vec<_> = frame.sidebar.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![groups::MAIN, groups::FINANCE, groups::REPORTS, groups::PROFILE]
        );
        assert!(guard.peek_return_target().is_none());
    }

    #[test]
    fn test_frame_does_not_gate_unlisted_paths() {
        let guard = guard();
        let session = StaticAuthSession::signed_in("tok", AuthUser::new("Yaw", Some("TECH")));

        let decision = guard.check(&session, "/settings", &UiPreferences::default());
        let frame = decision.frame().unwrap();
        assert_eq!(frame.content_path, "/settings");
        assert!(!guard.resolver().can_access(Some("TECH"), "/settings"));
    }

    #[test]
    fn test_missing_role_gets_fallback_sidebar() {
        let guard = guard();
        let session = StaticAuthSession::signed_in("tok", AuthUser::new("Nobody", None));

        let decision = guard.check(&session, "/", &UiPreferences::default());
        let frame = decision.frame().unwrap();
        assert_eq!(frame.role, Role::Unrecognized);
        assert_eq!(frame.sidebar, guard.resolver().nav(Some("TECH")));
    }

    #[test]
    fn test_guards_sharing_a_store_share_the_return_target() {
        let store: Arc<dyn ReturnTargetStore> = Arc::new(MemoryReturnTarget::default());
        let first = guard().with_return_targets(store.clone());
        let second = guard().with_return_targets(store);

        first.check(&StaticAuthSession::signed_out(), "/reports", &UiPreferences::default());

        assert_eq!(second.take_return_target(), "/reports");
        assert_eq!(first.take_return_target(), "/");
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl ReturnTargetStore for BrokenStore {
        fn remember(&self, _path: &str) -> crate::error::Result<()> {
            Err(GarageError::storage("read-only"))
        }

        fn take(&self) -> crate::error::Result<Option<String>> {
            Err(GarageError::storage("unreadable"))
        }

        fn peek(&self) -> crate::error::Result<Option<String>> {
            Err(GarageError::storage("unreadable"))
        }
    }

    #[test]
    fn test_broken_store_still_redirects_and_returns_home() {
        let guard = guard().with_return_targets(Arc::new(BrokenStore));

        let decision = guard.check(&StaticAuthSession::signed_out(), "/jobcards", &UiPreferences::default());
        assert!(decision.is_redirect());
        assert!(guard.peek_return_target().is_none());
        assert_eq!(guard.take_return_target(), "/");
    }
}
