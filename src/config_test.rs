use super::*;

#[test]
fn defaults_when_nothing_set() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "");
    assert_eq!(cfg.refresh_timeout_ms, 10_000);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_values(Some("https://api.example.com/ "), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.com");
    assert_eq!(cfg.endpoint("/api/token/"), "https://api.example.com/api/token/");
}

#[test]
fn same_origin_endpoint_is_path_only() {
    assert_eq!(ClientConfig::default().endpoint("/api/upload/"), "/api/upload/");
}

#[test]
fn timeout_parses() {
    let cfg = ClientConfig::from_values(None, Some(" 2500 ")).unwrap();
    assert_eq!(cfg.refresh_timeout_ms, 2500);
}

#[test]
fn blank_timeout_uses_default() {
    let cfg = ClientConfig::from_values(None, Some("  ")).unwrap();
    assert_eq!(cfg.refresh_timeout_ms, DEFAULT_REFRESH_TIMEOUT_MS);
}

#[test]
fn invalid_timeout_is_rejected() {
    assert_eq!(
        ClientConfig::from_values(None, Some("soon")),
        Err(ConfigError::InvalidTimeout("soon".to_owned()))
    );
    assert_eq!(
        ClientConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidTimeout("0".to_owned()))
    );
}
