use super::*;
use session::Directory;

fn admin() -> session::Identity {
    Directory::demo().find_by_email("admin@nccr.gov.in").cloned().unwrap()
}

#[test]
fn should_redirect_unauth_when_restored_idle_and_identity_missing() {
    let state = AuthState { identity: None, loading: false, restored: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_before_restore() {
    let state = AuthState { identity: None, loading: false, restored: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { identity: None, loading: true, restored: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_identity_exists() {
    let state = AuthState { identity: Some(admin()), loading: false, restored: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_auth_when_restored_idle_and_identity_present() {
    let state = AuthState { identity: Some(admin()), loading: false, restored: true };
    assert!(should_redirect_auth(&state));
}

#[test]
fn should_not_redirect_signed_in_before_restore() {
    let state = AuthState { identity: Some(admin()), loading: false, restored: false };
    assert!(!should_redirect_auth(&state));
}

#[test]
fn should_not_redirect_signed_in_while_loading() {
    let state = AuthState { identity: Some(admin()), loading: true, restored: true };
    assert!(!should_redirect_auth(&state));
}

#[test]
fn signed_out_visitor_stays_on_landing_page() {
    let state = AuthState { identity: None, loading: false, restored: true };
    assert!(!should_redirect_auth(&state));
    assert!(should_redirect_unauth(&state));
}

#[test]
fn redirects_never_fire_together() {
    for identity in [None, Some(admin())] {
        for loading in [false, true] {
            for restored in [false, true] {
                let state = AuthState { identity: identity.clone(), loading, restored };
                assert!(!(should_redirect_auth(&state) && should_redirect_unauth(&state)));
            }
        }
    }
}
