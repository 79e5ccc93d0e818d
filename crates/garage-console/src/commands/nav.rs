use super::print_json;
use anyhow::Result;
use garage_application::ConsoleContext;
use garage_core::nav::Role;
use serde_json::json;

/// Prints the sidebar for `role`, or for the signed-in user when omitted.
pub fn show(ctx: &ConsoleContext, role: Option<&str>) -> Result<()> {
    let sidebar = match role {
        Some(claim) => ctx.resolver().nav(Some(claim)),
        None => ctx.sidebar(),
    };
    print_json(&sidebar)
}

pub fn can_access(ctx: &ConsoleContext, role: Option<&str>, path: &str) -> Result<()> {
    let (claim, allowed) = match role {
        Some(claim) => (Some(claim.to_string()), ctx.resolver().can_access(Some(claim), path)),
        None => (ctx.session().role_claim(), ctx.can_access(path)),
    };
    let effective = ctx
        .resolver()
        .table()
        .effective_role(Role::from_claim(claim.as_deref()));

    print_json(&json!({
        "role": claim,
        "effectiveRole": effective.as_str(),
        "path": path,
        "allowed": allowed,
    }))
}
