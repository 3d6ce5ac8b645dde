//! Unit tests for verification client creation

use ev_shared::RemoteServiceConfig;

use crate::remote::create_verification_api;
use crate::InfrastructureError;

#[tokio::test]
async fn test_create_mock_service() {
    let config = RemoteServiceConfig::default();

    let service = create_verification_api(&config).expect("mock service");
    assert_eq!(service.provider_name(), "Mock");
}

#[tokio::test]
async fn test_create_http_service() {
    let config = RemoteServiceConfig::http("https://learn.example.org/api");

    let service = create_verification_api(&config).expect("http service");
    assert_eq!(service.provider_name(), "HTTP");
}

#[tokio::test]
async fn test_create_unknown_provider_fallback() {
    let config = RemoteServiceConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };

    let service = create_verification_api(&config).expect("fallback service");
    // Should fallback to mock
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_create_http_service_with_bad_url() {
    let config = RemoteServiceConfig::http("not a url");

    let result = create_verification_api(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}
