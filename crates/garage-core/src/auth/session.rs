//! Authentication session contract.
//!
//! The session is owned by the auth layer; the console core only reads it
//! (and asks it to log out on the user's behalf).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// The signed-in user as stored next to the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Raw role claim. Normalized by the navigation resolver.
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthUser {
    pub fn new(name: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.map(str::to_string),
        }
    }
}

/// Read access to the current authentication state.
#[async_trait::async_trait]
pub trait AuthSession: Send + Sync {
    /// Access token; its presence means the user is authenticated.
    fn access_token(&self) -> Option<String>;

    fn user(&self) -> Option<AuthUser>;

    /// Forgets the token and user.
    async fn logout(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool {
        self.access_token()
            .is_some_and(|token| !token.trim().is_empty())
    }

    fn role_claim(&self) -> Option<String> {
        self.user().and_then(|user| user.role)
    }
}

/// In-memory session, for tests and for hosts that manage tokens themselves.
#[derive(Debug, Default)]
pub struct StaticAuthSession {
    state: Mutex<(Option<String>, Option<AuthUser>)>,
}

impl StaticAuthSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(token: impl Into<String>, user: AuthUser) -> Self {
        Self {
            state: Mutex::new((Some(token.into()), Some(user))),
        }
    }
}

#[async_trait::async_trait]
impl AuthSession for StaticAuthSession {
    fn access_token(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .0
            .clone()
    }

    fn user(&self) -> Option<AuthUser> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .1
            .clone()
    }

    async fn logout(&self) -> Result<()> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = (None, None);
        Ok(())
    }
}
