//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages send signed-out visitors to `/auth`; the public landing page
//! sends signed-in visitors to `/dashboard`. Both wait for the stored session
//! to be read first.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::pages::dashboard::DASHBOARD_PATH;
use crate::state::auth::AuthState;

/// Route the guard sends signed-out visitors to.
pub const AUTH_PATH: &str = "/auth";

/// True once the stored session has been read, nothing is in flight, and
/// there is still no identity.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.restored && !state.loading && state.identity.is_none()
}

/// Redirect to `/auth` whenever [`should_redirect_unauth`] holds.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(AUTH_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// True once the stored session has been read, nothing is in flight, and an
/// identity is present.
pub fn should_redirect_auth(state: &AuthState) -> bool {
    state.restored && !state.loading && state.identity.is_some()
}

/// Redirect to `/dashboard` whenever [`should_redirect_auth`] holds.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_auth) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
