//! The session state machine.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is a cheap `Clone` handle over shared state. The client
//! creates exactly one and hands it to views through context; there is no
//! module-level global. Every mutation goes through `transition`, which
//! updates the slot under the mutex, releases it, then notifies subscribers
//! with a snapshot.
//!
//! CONCURRENCY
//! ===========
//! `login` and `register` suspend once, on the injected [`Delay`]. The mutex
//! is never held across that await, so overlapping calls interleave freely and
//! whichever resolves last owns both the in-memory slot and the stored copy.
//! There is no cancellation and no version check.
//!
//! ERROR HANDLING
//! ==============
//! Only `login` can fail, with [`SessionError::InvalidCredentials`]. Storage
//! failures are logged and never roll back or fail a transition. A stored
//! record that does not parse is deleted during [`SessionStore::restore`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::SessionConfig;
use crate::directory::Directory;
use crate::identity::{Identity, IdentityPatch, Role};
use crate::runtime::{Clock, Delay};
use crate::storage::Storage;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No directory entry matches the supplied email.
    #[error("invalid credentials")]
    InvalidCredentials,
}

// =============================================================================
// SESSION
// =============================================================================

/// Current identity plus the in-flight marker.
///
/// Authentication is derived from the identity slot, so the two cannot
/// disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    loading: bool,
}

impl Session {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// True while a `login` or `register` call is suspended.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

// =============================================================================
// STORE
// =============================================================================

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Handle to the application's single session.
///
/// Clones share the same slot, subscribers, and collaborators.
#[derive(Clone)]
pub struct SessionStore {
    session: Arc<Mutex<Session>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    storage: Arc<dyn Storage>,
    delay: Arc<dyn Delay>,
    clock: Arc<dyn Clock>,
    directory: Arc<Directory>,
    config: Arc<SessionConfig>,
}

impl SessionStore {
    /// Empty store over the demo directory with default config.
    ///
    /// Nothing is read from `storage` until [`restore`](Self::restore).
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, delay: Arc<dyn Delay>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            listeners: Arc::new(Mutex::new(Vec::new())),
            storage,
            delay,
            clock,
            directory: Arc::new(Directory::demo()),
            config: Arc::new(SessionConfig::default()),
        }
    }

    #[must_use]
    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock_session().clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.lock_session().identity.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock_session().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock_session().loading
    }

    /// Register a callback run after every session transition.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.lock_listeners().push(Arc::new(listener));
    }

    /// Load the stored identity, if any.
    ///
    /// Returns `true` when a stored identity was adopted. A record that fails
    /// to parse is removed from storage and the session is cleared; this is
    /// never reported as an error.
    pub fn restore(&self) -> bool {
        let raw = match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("session restore skipped: {e}");
                return false;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                log::debug!("session restored for {}", identity.email);
                self.transition(|s| s.identity = Some(identity));
                true
            }
            Err(e) => {
                log::warn!("discarding malformed stored session: {e}");
                self.forget();
                self.transition(|s| s.identity = None);
                false
            }
        }
    }

    /// Sign in as the directory entry for `email`.
    ///
    /// Any password is accepted for a known email. When calls overlap, the
    /// first one to resume clears the loading flag even if another is still
    /// suspended.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] when no entry matches;
    /// the current identity is left as it was.
    pub async fn login(&self, email: &str, _password: &str) -> Result<Identity, SessionError> {
        self.transition(|s| s.loading = true);
        self.delay.wait(self.config.latency).await;

        let Some(identity) = self.directory.find_by_email(email).cloned() else {
            log::debug!("login rejected for {email}");
            self.transition(|s| s.loading = false);
            return Err(SessionError::InvalidCredentials);
        };

        log::debug!("login succeeded for {email} as {}", identity.role);
        self.transition(|s| {
            s.identity = Some(identity.clone());
            s.loading = false;
        });
        self.persist(&identity);
        Ok(identity)
    }

    /// Create a fresh identity and sign in as it.
    ///
    /// Never fails. Emails are not checked against the directory or earlier
    /// registrations. Shares the loading flag with `login`, so overlapping
    /// calls clear it as soon as the first one resumes.
    pub async fn register(&self, email: &str, _password: &str, name: &str, role: Role) -> Identity {
        self.transition(|s| s.loading = true);
        self.delay.wait(self.config.latency).await;

        let now = self.clock.now();
        let identity = Identity {
            id: new_identity_id(now),
            email: email.to_owned(),
            name: name.to_owned(),
            role,
            organization: None,
            location: None,
            avatar: None,
            credits: 0,
            tokens: 0,
            level: 1,
            badges: Vec::new(),
            joined_at: format_timestamp(now),
        };

        log::debug!("registered {email} as {role}");
        self.transition(|s| {
            s.identity = Some(identity.clone());
            s.loading = false;
        });
        self.persist(&identity);
        identity
    }

    /// Clear the session and its stored copy.
    pub fn logout(&self) {
        self.transition(|s| s.identity = None);
        self.forget();
    }

    /// Merge `patch` into the current identity and store the result.
    ///
    /// Returns the merged identity, or `None` (doing nothing) when signed out.
    pub fn update_user(&self, patch: IdentityPatch) -> Option<Identity> {
        let (identity, snapshot) = {
            let mut session = self.lock_session();
            let identity = session.identity.as_mut()?;
            patch.apply_to(identity);
            let identity = identity.clone();
            (identity, session.clone())
        };
        self.notify(&snapshot);
        self.persist(&identity);
        Some(identity)
    }

    fn transition(&self, apply: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.lock_session();
            apply(&mut session);
            session.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &Session) {
        let listeners = self.lock_listeners().clone();
        for listener in &listeners {
            listener(snapshot);
        }
    }

    fn persist(&self, identity: &Identity) {
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session not persisted: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.config.storage_key, &raw) {
            log::warn!("session not persisted: {e}");
        }
    }

    fn forget(&self) {
        if let Err(e) = self.storage.remove(&self.config.storage_key) {
            log::warn!("stored session not removed: {e}");
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Time-ordered unique id (UUID v7) stamped with `now`.
fn new_identity_id(now: OffsetDateTime) -> String {
    let secs = u64::try_from(now.unix_timestamp()).unwrap_or(0);
    let ts = uuid::Timestamp::from_unix(uuid::NoContext, secs, now.nanosecond());
    uuid::Uuid::new_v7(ts).to_string()
}

fn format_timestamp(now: OffsetDateTime) -> String {
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
