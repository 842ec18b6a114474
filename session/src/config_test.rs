use super::*;

#[test]
fn default_uses_auth_user_key() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.storage_key, "auth_user");
}

#[test]
fn default_latency_is_one_second() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.latency, Duration::from_secs(1));
}

#[test]
fn builders_override_fields() {
    let cfg = SessionConfig::default()
        .with_storage_key("registry_user")
        .with_latency(Duration::ZERO);
    assert_eq!(cfg.storage_key, "registry_user");
    assert_eq!(cfg.latency, Duration::ZERO);
}
