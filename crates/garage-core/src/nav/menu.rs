//! Static sidebar definition of the console.

use super::model::{NavGroup, NavItem};
use once_cell::sync::Lazy;

/// Group labels. They double as access-control keys in role policies.
pub mod groups {
    pub const MAIN: &str = "Main";
    pub const OPERATIONS: &str = "Operations";
    pub const INVENTORY: &str = "Inventory";
    pub const FINANCE: &str = "Finance";
    pub const REPORTS: &str = "Reports";
    pub const ADMINISTRATION: &str = "Administration";
    pub const PROFILE: &str = "Profile";

    pub const ALL: [&str; 7] = [
        MAIN,
        OPERATIONS,
        INVENTORY,
        FINANCE,
        REPORTS,
        ADMINISTRATION,
        PROFILE,
    ];
}

static DEFAULT_MENU: Lazy<Vec<NavGroup>> = Lazy::new(|| {
    vec![
        NavGroup::new(
            groups::MAIN,
            vec![
                NavItem::new("/", "Dashboard", "layout-dashboard"),
                NavItem::new("/jobcards", "Job Cards", "clipboard-list"),
            ],
        ),
        NavGroup::new(
            groups::OPERATIONS,
            vec![
                NavItem::new("/customers", "Customers", "users"),
                NavItem::new("/vehicles", "Vehicles", "car"),
                NavItem::new("/appointments", "Appointments", "calendar"),
            ],
        ),
        NavGroup::new(
            groups::INVENTORY,
            vec![
                NavItem::new("/inventory", "Parts & Stock", "package"),
                NavItem::new("/suppliers", "Suppliers", "truck"),
                NavItem::new("/purchase-orders", "Purchase Orders", "shopping-cart"),
            ],
        ),
        NavGroup::new(
            groups::FINANCE,
            vec![
                NavItem::new("/finance", "Finance Overview", "wallet"),
                NavItem::new("/invoices", "Invoices", "receipt"),
                NavItem::new("/expenses", "Expenses", "credit-card"),
            ],
        ),
        NavGroup::new(
            groups::REPORTS,
            vec![
                NavItem::new("/reports", "Reports", "bar-chart"),
                NavItem::new("/reports/analytics", "Analytics", "trending-up"),
            ],
        ),
        NavGroup::new(
            groups::ADMINISTRATION,
            vec![
                NavItem::new("/users", "Users", "user-cog"),
                NavItem::new("/settings", "Settings", "settings"),
            ],
        ),
        NavGroup::new(
            groups::PROFILE,
            vec![NavItem::new("/profile", "My Profile", "user")],
        ),
    ]
});

/// The console's sidebar in display order.
pub fn default_menu() -> &'static [NavGroup] {
    &DEFAULT_MENU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_covers_every_group_label() {
        let labels: Vec<_> = default_menu().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, groups::ALL.to_vec());
    }

    #[test]
    fn test_menu_paths_are_unique() {
        let mut seen = HashSet::new();
        for item in default_menu().iter().flat_map(|g| &g.items) {
            assert!(seen.insert(item.path.as_str()), "duplicate path {}", item.path);
        }
    }
}
