//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use arxiv_search::client::ArxivClient;
use arxiv_search::config::Config;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_targets_public_api() {
    let config = Config::default();
    assert_eq!(config.api_url, "http://export.arxiv.org/api/query");
    assert!(config.download_timeout > config.request_timeout);
}

#[test]
fn test_config_struct_update() {
    let config = Config { request_timeout: Duration::from_secs(1), ..Config::default() };
    assert_eq!(config.request_timeout, Duration::from_secs(1));
    assert_eq!(config.pdf_base_url, "https://arxiv.org/pdf");
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = ArxivClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_rejects_invalid_user_agent() {
    let config = Config { user_agent: "bad\nagent".to_string(), ..Config::default() };
    assert!(ArxivClient::new(config).is_err());
}

#[test]
fn test_client_debug_shows_endpoints() {
    let client = ArxivClient::new(Config::for_testing("http://127.0.0.1:4010")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("http://127.0.0.1:4010/api/query"));
    assert!(debug.contains("http://127.0.0.1:4010/pdf"));
}

#[test]
fn test_client_is_cloneable() {
    let client = ArxivClient::new(Config::default()).unwrap();
    let _cloned = client.clone();
}
