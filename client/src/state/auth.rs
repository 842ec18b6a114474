//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware components to coordinate login
//! redirects and role-dependent rendering. Kept in sync with the
//! `SessionStore` through its subscriber hook.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Identity, Role, Session};

/// Reactive mirror of the session, provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
    /// Set once the stored session has been read after mount. Guards wait
    /// for it so a returning user is not bounced to `/auth`.
    pub restored: bool,
}

impl AuthState {
    /// Copy identity and loading from a store snapshot; `restored` is kept.
    pub fn sync(&mut self, session: &Session) {
        self.identity = session.identity().cloned();
        self.loading = session.is_loading();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}
