//! Role-specific sidebar navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const COMMUNITY_NAV: [NavItem; 6] = [
    NavItem { label: "Overview", href: "/dashboard" },
    NavItem { label: "Submit Plantation", href: "/submit" },
    NavItem { label: "My Contributions", href: "/contributions" },
    NavItem { label: "Analytics", href: "/analytics" },
    NavItem { label: "Achievements", href: "/achievements" },
    NavItem { label: "Notifications", href: "/notifications" },
];

const ADMIN_NAV: [NavItem; 7] = [
    NavItem { label: "Overview", href: "/dashboard" },
    NavItem { label: "Submissions", href: "/submissions" },
    NavItem { label: "Monitoring", href: "/monitoring" },
    NavItem { label: "AI Validation", href: "/validation" },
    NavItem { label: "Communities", href: "/communities" },
    NavItem { label: "Analytics", href: "/analytics" },
    NavItem { label: "Reports", href: "/reports" },
];

/// Admins get the registry console; every other role gets the contributor menu.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    if role.is_admin() { &ADMIN_NAV } else { &COMMUNITY_NAV }
}

/// Whether `item` should render as the current page.
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    item.href == pathname
}
