//! Sign-out flow.

use crate::context::{ConsoleContext, Navigation};
use garage_core::error::Result;
use garage_core::ui::ConfirmOptions;

pub const LOGOUT_TITLE: &str = "Sign out";
pub const LOGOUT_MESSAGE: &str = "Sign out of the console?";

/// Asks before clearing the session, then sends the user to the login route.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutFlow;

impl LogoutFlow {
    pub fn options() -> ConfirmOptions {
        ConfirmOptions::new(LOGOUT_TITLE, LOGOUT_MESSAGE)
            .with_confirm_label(LOGOUT_TITLE)
            .danger()
    }

    /// Runs the flow. Declining (or being superseded) leaves the session intact.
    pub async fn run(ctx: &ConsoleContext) -> Result<Navigation> {
        if !ctx.ui().confirm(Self::options()).await {
            tracing::debug!("sign out declined");
            return Ok(Navigation::Stay);
        }

        ctx.session().logout().await?;
        ctx.ui().toast().info("Signed out");
        Ok(Navigation::To(ctx.config().routes.login.clone()))
    }
}
