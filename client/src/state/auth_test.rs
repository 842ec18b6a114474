use std::sync::Arc;

use session::{MemoryStorage, NoDelay, SessionStore, SystemClock};

use super::*;

fn store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::new()), Arc::new(NoDelay), Arc::new(SystemClock))
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_identity() {
    let state = AuthState::default();
    assert!(state.identity.is_none());
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn auth_state_default_not_loading_not_restored() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(!state.restored);
}

// =============================================================
// sync
// =============================================================

#[tokio::test]
async fn sync_copies_identity_and_loading() {
    let store = store();
    store.login("admin@nccr.gov.in", "pw").await.unwrap();

    let mut state = AuthState::default();
    state.sync(&store.snapshot());

    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Admin));
}

#[tokio::test]
async fn sync_preserves_restored_flag() {
    let store = store();
    store.login("admin@nccr.gov.in", "pw").await.unwrap();
    store.logout();

    let mut state = AuthState { restored: true, ..AuthState::default() };
    state.sync(&store.snapshot());

    assert!(state.restored);
    assert!(!state.is_authenticated());
}

#[tokio::test]
async fn subscriber_mirrors_every_transition() {
    let store = store();
    let mirror = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = mirror.clone();
    store.subscribe(move |session| {
        let mut state = AuthState::default();
        state.sync(session);
        sink.lock().unwrap().push((state.loading, state.is_authenticated()));
    });

    store.login("community@blucarbon.org", "demo123").await.unwrap();

    assert_eq!(*mirror.lock().unwrap(), vec![(true, false), (false, true)]);
}
