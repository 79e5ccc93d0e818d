use super::host::{self, ConfirmPolicy};
use super::print_json;
use crate::bootstrap::ConsoleApp;
use anyhow::Result;
use garage_application::LogoutFlow;
use garage_core::auth::AuthUser;

/// Guards a navigation and prints the decision.
pub async fn guard(app: &ConsoleApp, path: &str) -> Result<()> {
    let decision = app.ctx.navigate(path).await?;
    print_json(&decision)
}

/// Stores credentials and prints where the console continues.
pub fn login(app: &ConsoleApp, name: &str, role: Option<&str>, token: &str) -> Result<()> {
    app.session.sign_in(token, &AuthUser::new(name, role))?;
    tracing::info!(user = name, "signed in");
    print_json(&app.ctx.after_login())
}

pub async fn logout(app: &ConsoleApp, policy: ConfirmPolicy) -> Result<()> {
    let renderer = host::spawn(app.ctx.ui().clone(), policy);
    let next = LogoutFlow::run(&app.ctx).await;
    tokio::task::yield_now().await;
    renderer.abort();
    print_json(&next?)
}
