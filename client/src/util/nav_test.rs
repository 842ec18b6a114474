use super::*;

#[test]
fn admin_gets_registry_console() {
    let labels: Vec<&str> = nav_items(Role::Admin).iter().map(|i| i.label).collect();
    assert_eq!(
        labels,
        ["Overview", "Submissions", "Monitoring", "AI Validation", "Communities", "Analytics", "Reports"]
    );
}

#[test]
fn non_admin_roles_share_contributor_menu() {
    for role in [Role::Community, Role::Ngo, Role::Panchayat] {
        assert_eq!(nav_items(role), &COMMUNITY_NAV);
    }
}

#[test]
fn every_menu_starts_at_dashboard() {
    for role in Role::ALL {
        assert_eq!(nav_items(role)[0].href, "/dashboard");
    }
}

#[test]
fn overview_is_active_only_on_dashboard() {
    let overview = COMMUNITY_NAV[0];
    assert!(!is_active(&overview, "/"));
    assert!(is_active(&overview, "/dashboard"));
    assert!(!is_active(&overview, "/submit"));
}

#[test]
fn other_items_match_exact_path() {
    let submit = COMMUNITY_NAV[1];
    assert!(is_active(&submit, "/submit"));
    assert!(!is_active(&submit, "/"));
}
