//! Role access policies.

use super::menu::groups;
use super::role::Role;
use crate::error::{GarageError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a single role may see in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAccessPolicy {
    /// Groups granted in full.
    #[serde(default)]
    pub allowed_groups: BTreeSet<String>,
    /// Groups whose emitted items are marked read-only. May name groups that
    /// are only reachable through `special_item_paths`.
    #[serde(default)]
    pub read_only_groups: BTreeSet<String>,
    /// Individual item paths granted even when their group is not allowed.
    #[serde(default)]
    pub special_item_paths: BTreeSet<String>,
}

impl RoleAccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn read_only<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_only_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn special_items<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_item_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn allows_group(&self, label: &str) -> bool {
        self.allowed_groups.contains(label)
    }

    pub fn is_read_only_group(&self, label: &str) -> bool {
        self.read_only_groups.contains(label)
    }

    pub fn grants_item(&self, path: &str) -> bool {
        self.special_item_paths.contains(path)
    }
}

/// Total mapping from [`Role`] to [`RoleAccessPolicy`].
///
/// Every known role owns an entry; `Unrecognized` borrows the entry of the
/// designated fallback role, which is always a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    admin: RoleAccessPolicy,
    manager: RoleAccessPolicy,
    cashier: RoleAccessPolicy,
    tech: RoleAccessPolicy,
    fallback: Role,
}

impl PolicyTable {
    pub fn new(
        admin: RoleAccessPolicy,
        manager: RoleAccessPolicy,
        cashier: RoleAccessPolicy,
        tech: RoleAccessPolicy,
        fallback: Role,
    ) -> Result<Self> {
        if !fallback.is_known() {
            return Err(GarageError::policy(
                "fallback role must be a role with its own policy",
            ));
        }
        Ok(Self {
            admin,
            manager,
            cashier,
            tech,
            fallback,
        })
    }

    pub fn fallback(&self) -> Role {
        self.fallback
    }

    /// The role whose policy actually applies to `role`.
    pub fn effective_role(&self, role: Role) -> Role {
        if role.is_known() { role } else { self.fallback }
    }

    pub fn policy_for(&self, role: Role) -> &RoleAccessPolicy {
        match self.effective_role(role) {
            Role::Admin => &self.admin,
            Role::Manager => &self.manager,
            Role::Cashier => &self.cashier,
            Role::Tech => &self.tech,
            Role::Unrecognized => self.policy_for(self.fallback),
        }
    }

    /// Replaces the policy of a known role.
    pub fn with_policy(mut self, role: Role, policy: RoleAccessPolicy) -> Result<Self> {
        match role {
            Role::Admin => self.admin = policy,
            Role::Manager => self.manager = policy,
            Role::Cashier => self.cashier = policy,
            Role::Tech => self.tech = policy,
            Role::Unrecognized => {
                return Err(GarageError::policy(
                    "unrecognized role cannot own a policy; change the fallback instead",
                ));
            }
        }
        Ok(self)
    }

    pub fn with_fallback(self, fallback: Role) -> Result<Self> {
        Self::new(self.admin, self.manager, self.cashier, self.tech, fallback)
    }
}

impl Default for PolicyTable {
    /// The console's built-in roles. Tech is the most restrictive and serves
    /// as the fallback.
    fn default() -> Self {
        Self {
            admin: RoleAccessPolicy::new().allow(groups::ALL),
            manager: RoleAccessPolicy::new().allow([
                groups::MAIN,
                groups::OPERATIONS,
                groups::INVENTORY,
                groups::FINANCE,
                groups::REPORTS,
                groups::PROFILE,
            ]),
            cashier: RoleAccessPolicy::new()
                .allow([groups::MAIN, groups::PROFILE])
                .read_only([groups::FINANCE, groups::REPORTS])
                .special_items(["/jobcards", "/finance", "/reports"]),
            tech: RoleAccessPolicy::new().special_items(["/jobcards"]),
            fallback: Role::Tech,
        }
    }
}
