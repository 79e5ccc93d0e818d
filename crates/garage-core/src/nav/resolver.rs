//! Role-based navigation resolution.
//!
//! Pure functions over a static menu and a policy table. The output is
//! advisory UI metadata; it is not an authorization boundary.

use super::menu::default_menu;
use super::model::{NavGroup, ResolvedNavGroup, ResolvedNavItem};
use super::policy::PolicyTable;
use super::role::Role;
use std::sync::Arc;

/// Filters `menu` down to what `role` may see.
///
/// Fully allowed groups are emitted whole. Other groups keep only the items
/// granted individually, and disappear when none are. Group order and item
/// order follow `menu`.
pub fn resolve(role: Role, menu: &[NavGroup], table: &PolicyTable) -> Vec<ResolvedNavGroup> {
    let policy = table.policy_for(role);

    menu.iter()
        .filter_map(|group| {
            let read_only = policy.is_read_only_group(&group.label);
            let fully_allowed = policy.allows_group(&group.label);

            let items: Vec<ResolvedNavItem> = group
                .items
                .iter()
                .filter(|item| fully_allowed || policy.grants_item(&item.path))
                .map(|item| ResolvedNavItem {
                    path: item.path.clone(),
                    label: item.label.clone(),
                    icon: item.icon.clone(),
                    read_only,
                })
                .collect();

            if items.is_empty() {
                return None;
            }

            Some(ResolvedNavGroup {
                label: group.label.clone(),
                read_only,
                items,
            })
        })
        .collect()
}

/// True iff `path` appears in some group resolved for `role`.
pub fn can_access(role: Role, path: &str, menu: &[NavGroup], table: &PolicyTable) -> bool {
    resolve(role, menu, table)
        .iter()
        .any(|group| group.contains_path(path))
}

/// A menu and a policy table bundled for repeated lookups by role claim.
#[derive(Debug, Clone)]
pub struct NavigationResolver {
    menu: Arc<Vec<NavGroup>>,
    table: Arc<PolicyTable>,
}

impl NavigationResolver {
    pub fn new(menu: Vec<NavGroup>, table: PolicyTable) -> Self {
        Self {
            menu: Arc::new(menu),
            table: Arc::new(table),
        }
    }

    /// The built-in menu with the given policy table.
    pub fn with_table(table: PolicyTable) -> Self {
        Self::new(default_menu().to_vec(), table)
    }

    pub fn menu(&self) -> &[NavGroup] {
        &self.menu
    }

    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Sidebar for a raw role claim from the auth session.
    pub fn nav(&self, role_claim: Option<&str>) -> Vec<ResolvedNavGroup> {
        self.nav_for(self.normalize(role_claim))
    }

    pub fn nav_for(&self, role: Role) -> Vec<ResolvedNavGroup> {
        resolve(role, &self.menu, &self.table)
    }

    pub fn can_access(&self, role_claim: Option<&str>, path: &str) -> bool {
        can_access(self.normalize(role_claim), path, &self.menu, &self.table)
    }

    fn normalize(&self, role_claim: Option<&str>) -> Role {
        let role = Role::from_claim(role_claim);
        if !role.is_known() {
            tracing::debug!(
                claim = role_claim.unwrap_or("<absent>"),
                fallback = %self.table.fallback(),
                "unrecognized role, using fallback policy"
            );
        }
        role
    }
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::with_table(PolicyTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::menu::groups;
    use crate::nav::model::NavItem;
    use crate::nav::policy::RoleAccessPolicy;

    fn labels(groups: &[ResolvedNavGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.label.as_str()).collect()
    }

    #[test]
    fn test_cashier_scenario() {
        let resolved = resolve(Role::Cashier, default_menu(), &PolicyTable::default());

        assert_eq!(
            labels(&resolved),
            vec![groups::MAIN, groups::FINANCE, groups::REPORTS, groups::PROFILE]
        );

        let main = &resolved[0];
        assert_eq!(main.items.len(), 2);
        assert!(main.items.iter().all(|i| !i.read_only));

        let finance = &resolved[1];
        assert_eq!(finance.paths(), vec!["/finance"]);
        assert!(finance.read_only);
        assert!(finance.items[0].read_only);

        let reports = &resolved[2];
        assert_eq!(reports.paths(), vec!["/reports"]);
        assert!(reports.items[0].read_only);

        assert_eq!(resolved[3].paths(), vec!["/profile"]);
    }

    #[test]
    fn test_tech_special_item_in_operations() {
        let menu = vec![
            NavGroup::new(
                groups::OPERATIONS,
                vec![
                    NavItem::new("/jobcards", "Job Cards", "clipboard-list"),
                    NavItem::new("/customers", "Customers", "users"),
                    NavItem::new("/vehicles", "Vehicles", "car"),
                ],
            ),
            NavGroup::new(
                groups::INVENTORY,
                vec![NavItem::new("/inventory", "Parts", "package")],
            ),
        ];

        let resolved = resolve(Role::Tech, &menu, &PolicyTable::default());

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].label, groups::OPERATIONS);
        assert_eq!(resolved[0].paths(), vec!["/jobcards"]);
        assert!(!resolved[0].items[0].read_only);
    }

    #[test]
    fn test_unknown_role_matches_fallback() {
        let resolver = NavigationResolver::default();
        let fallback = resolver.nav_for(resolver.table().fallback());

        assert_eq!(resolver.nav(Some("GUEST")), fallback);
        assert_eq!(resolver.nav(None), fallback);
    }

    #[test]
    fn test_admin_sees_everything_in_order() {
        let resolved = resolve(Role::Admin, default_menu(), &PolicyTable::default());
        assert_eq!(labels(&resolved), groups::ALL.to_vec());
        for (resolved, original) in resolved.iter().zip(default_menu()) {
            let original_paths: Vec<_> = original.items.iter().map(|i| i.path.as_str()).collect();
            assert_eq!(resolved.paths(), original_paths);
        }
    }

    #[test]
    fn test_special_items_keep_menu_order() {
        let table = PolicyTable::default()
            .with_policy(
                Role::Tech,
                RoleAccessPolicy::new().special_items(["/appointments", "/customers"]),
            )
            .unwrap();

        let resolved = resolve(Role::Tech, default_menu(), &table);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].paths(), vec!["/customers", "/appointments"]);
    }

    #[test]
    fn test_read_only_applies_to_fully_allowed_groups() {
        let table = PolicyTable::default()
            .with_policy(
                Role::Manager,
                RoleAccessPolicy::new()
                    .allow([groups::FINANCE])
                    .read_only([groups::FINANCE]),
            )
            .unwrap();

        let resolved = resolve(Role::Manager, default_menu(), &table);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].items.len(), 3);
        assert!(resolved[0].items.iter().all(|i| i.read_only));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let table = PolicyTable::default();
        for role in Role::KNOWN {
            assert_eq!(
                resolve(role, default_menu(), &table),
                resolve(role, default_menu(), &table)
            );
        }
    }

    #[test]
    fn test_can_access_matches_resolved_paths() {
        let resolver = NavigationResolver::default();
        let all_paths: Vec<String> = default_menu()
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.path.clone()))
            .chain(["/nowhere".to_string()])
            .collect();

        for claim in [Some("ADMIN"), Some("manager"), Some("Cashier"), Some("TECH"), Some("GUEST"), None] {
            let resolved = resolver.nav(claim);
            for path in &all_paths {
                let listed = resolved.iter().any(|g| g.contains_path(path));
                assert_eq!(resolver.can_access(claim, path), listed, "{claim:?} {path}");
            }
        }
    }

    #[test]
    fn test_cashier_access_checks() {
        let resolver = NavigationResolver::default();
        assert!(resolver.can_access(Some("CASHIER"), "/jobcards"));
        assert!(resolver.can_access(Some("CASHIER"), "/finance"));
        assert!(!resolver.can_access(Some("CASHIER"), "/invoices"));
        assert!(!resolver.can_access(Some("CASHIER"), "/customers"));
    }

    #[test]
    fn test_duplicate_path_any_match_grants() {
        let menu = vec![
            NavGroup::new("A", vec![NavItem::new("/shared", "Shared", "x")]),
            NavGroup::new("B", vec![NavItem::new("/shared", "Shared", "x")]),
        ];
        let table = PolicyTable::default()
            .with_policy(Role::Tech, RoleAccessPolicy::new().allow(["B"]))
            .unwrap();

        assert!(can_access(Role::Tech, "/shared", &menu, &table));
        let resolved = resolve(Role::Tech, &menu, &table);
        assert_eq!(labels(&resolved), vec!["B"]);
    }
}
