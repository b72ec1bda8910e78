//! Validation tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

#[test]
fn test_management_url_trailing_slash_is_stripped() {
    let config = ConfigLoader::new()
        .with_management_url("https://management.azure.com/".to_string())
        .build()
        .unwrap();

    assert_eq!(
        config.connection.management_url,
        "https://management.azure.com"
    );
}

#[test]
fn test_management_url_requires_http_scheme() {
    let result = ConfigLoader::new()
        .with_management_url("ftp://management.azure.com".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_management_url_must_be_absolute() {
    let result = ConfigLoader::new()
        .with_management_url("management.azure.com".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_lookup_timeout(Duration::from_secs(0))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { var, .. }) => assert_eq!(var, "lookup_timeout"),
        other => panic!("Expected InvalidTimeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_excessive_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_listing_timeout(Duration::from_secs(3601))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { var, .. }) => assert_eq!(var, "listing_timeout"),
        other => panic!("Expected InvalidTimeout, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_page_size_bounds() {
    assert!(matches!(
        ConfigLoader::new().with_agent_page_size(0).build(),
        Err(ConfigError::InvalidPageSize { .. })
    ));
    assert!(matches!(
        ConfigLoader::new().with_agent_page_size(101).build(),
        Err(ConfigError::InvalidPageSize { .. })
    ));
    assert_eq!(
        ConfigLoader::new()
            .with_agent_page_size(100)
            .build()
            .unwrap()
            .defaults
            .agent_page_size,
        100
    );
}
