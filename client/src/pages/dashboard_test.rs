use super::*;

#[test]
fn admin_role_selects_admin_view() {
    assert_eq!(DashboardView::for_role(Role::Admin), DashboardView::Admin);
}

#[test]
fn other_roles_select_community_view() {
    for role in [Role::Community, Role::Ngo, Role::Panchayat] {
        assert_eq!(DashboardView::for_role(role), DashboardView::Community);
    }
}

#[test]
fn directory_accounts_land_on_expected_views() {
    let dir = session::Directory::demo();
    let admin = dir.find_by_email("admin@nccr.gov.in").unwrap();
    let leader = dir.find_by_email("community@blucarbon.org").unwrap();
    assert_eq!(DashboardView::for_role(admin.role), DashboardView::Admin);
    assert_eq!(DashboardView::for_role(leader.role), DashboardView::Community);
}
