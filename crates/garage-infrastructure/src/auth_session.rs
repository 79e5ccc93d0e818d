//! Auth session backed by [`LocalStorage`].

use crate::storage::{LocalStorage, keys};
use garage_core::auth::{AuthSession, AuthUser};
use garage_core::error::Result;
use std::sync::Arc;

/// Reads the token and user written by the login flow.
///
/// An unparseable user record is treated as absent rather than as an error;
/// the token alone still decides whether the user is authenticated.
#[derive(Debug, Clone)]
pub struct LocalStorageAuthSession {
    storage: Arc<LocalStorage>,
}

impl LocalStorageAuthSession {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    /// Stores a fresh session, as the login flow does after a successful sign-in.
    ///
    /// Token and user are written together; a failed write stores neither.
    pub fn sign_in(&self, token: &str, user: &AuthUser) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set_items(&[
            (keys::AUTH_TOKEN, token.to_string()),
            (keys::AUTH_USER, user_json),
        ])?;
        tracing::debug!(user = %user.name, "session stored");
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthSession for LocalStorageAuthSession {
    fn access_token(&self) -> Option<String> {
        self.storage.get_item(keys::AUTH_TOKEN)
    }

    fn user(&self) -> Option<AuthUser> {
        let raw = self.storage.get_item(keys::AUTH_USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    async fn logout(&self) -> Result<()> {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || {
            storage.remove_items(&[keys::AUTH_TOKEN, keys::AUTH_USER])
        })
        .await??;

        tracing::info!("signed out");
        Ok(())
    }
}
