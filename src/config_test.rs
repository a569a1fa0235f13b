use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("MENTORA_API_URL", "http://127.0.0.1:5000")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "http://127.0.0.1:5000");
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("MENTORA_API_URL", " https://backend.test/ "),
        ("PORT", "8080"),
        ("MENTORA_PROXY_TIMEOUT_SECS", "12"),
        ("MENTORA_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://backend.test");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 12, connect_secs: 2 });
}

#[test]
fn missing_api_url_is_an_error() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[])), Err(ConfigError::Missing("MENTORA_API_URL")));
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("MENTORA_API_URL", "   ")])),
        Err(ConfigError::Missing("MENTORA_API_URL"))
    );
}

#[test]
fn api_url_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("MENTORA_API_URL", "backend:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "MENTORA_API_URL", value: "backend:5000".into() });
}

#[test]
fn unparsable_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("MENTORA_API_URL", "http://x"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}
