//! Authentication-facing domain module.
//!
//! - `session`: the consumed auth session contract
//! - `guard`: redirect-or-render decision for protected routes
//! - `return_target`: where to resume after login

mod guard;
mod return_target;
mod session;

pub use guard::{AppFrame, GuardDecision, RouteGuard};
pub use return_target::{MemoryReturnTarget, ReturnTargetStore};
pub use session::{AuthSession, AuthUser, StaticAuthSession};
