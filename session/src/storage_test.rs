use super::*;

#[test]
fn get_absent_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("auth_user"), Ok(None));
}

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("second".to_owned())));
}

#[test]
fn remove_deletes_key() {
    let storage = MemoryStorage::with_entry("k", "v");
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k"), Ok(None));
}

#[test]
fn remove_absent_key_succeeds() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("missing"), Ok(()));
}

#[test]
fn keys_are_independent() {
    let storage = MemoryStorage::with_entry("a", "1");
    storage.set("b", "2").unwrap();
    storage.remove("a").unwrap();
    assert_eq!(storage.get("b"), Ok(Some("2".to_owned())));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Backend("QuotaExceededError".to_owned()).to_string(),
        "storage backend error: QuotaExceededError"
    );
}
