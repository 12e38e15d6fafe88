use kis_client::application::config::Config;
use kis_client::constants::{DEFAULT_CUSTOMER_TYPE, DEFAULT_TIMEOUT_SECS};
use kis_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_falls_back() {
    let value: u64 = get_env_or_default("KIS_TEST_SURELY_UNSET_VARIABLE", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_none_unset() {
    assert!(get_env_or_none::<String>("KIS_TEST_SURELY_UNSET_VARIABLE").is_none());
}

#[test]
fn test_config_with_credentials() {
    let config = Config::with_credentials("https://example.com", "key", "secret")
        .with_account_number("1234567801")
        .with_timeout(5);
    assert_eq!(config.rest_api.base_url, "https://example.com");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.customer_type, DEFAULT_CUSTOMER_TYPE);
    assert_eq!(
        config.credentials.account_number.as_deref(),
        Some("1234567801")
    );
    assert_ne!(DEFAULT_TIMEOUT_SECS, 5);
}

#[test]
fn test_config_never_serializes_secret() {
    let config = Config::with_credentials("https://example.com", "key", "top-secret");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("key"));
    assert!(!json.contains("top-secret"));
}
