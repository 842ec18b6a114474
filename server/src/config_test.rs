use super::*;

/// # Safety
/// Only one test may touch HOST/PORT.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults_overrides_and_rejects() {
    // One test owns HOST/PORT; splitting it would race under the parallel runner.
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.addr(), "127.0.0.1:8080");

    unsafe { std::env::set_var("PORT", "not-a-port") };
    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "not-a-port".into() });

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".into() }));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}
