//! Navigation access domain module.
//!
//! # Module Structure
//!
//! - `model`: static menu and resolved menu types
//! - `menu`: the console's built-in sidebar
//! - `role`: closed set of user roles
//! - `policy`: per-role access policies and the total policy table
//! - `resolver`: pure resolution of a menu for a role

mod menu;
mod model;
mod policy;
mod resolver;
mod role;

pub use menu::{default_menu, groups};
pub use model::{NavGroup, NavItem, ResolvedNavGroup, ResolvedNavItem};
pub use policy::{PolicyTable, RoleAccessPolicy};
pub use resolver::{NavigationResolver, can_access, resolve};
pub use role::Role;
