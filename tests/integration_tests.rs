//! Integration tests for configuration and credential resolution.
//!
//! These tests verify the path from raw credentials to a configured client
//! without sending any request.

use std::collections::HashMap;
use std::time::Duration;

use shopify_admin::config::credentials::{
    self, CredentialSource, CredentialsFile, StoredCredentials,
};
use shopify_admin::{
    AccessToken, AdminConfig, ApiVersion, ConfigError, GraphqlClient, HostUrl, ShopDomain,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_full_workflow_newtypes_to_config_to_endpoint() {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("https://My-Store.myshopify.com/").unwrap())
        .access_token(AccessToken::new("  shpat_0123456789abcdef ").unwrap())
        .api_version("2025-10".parse().unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
    assert_eq!(config.access_token().as_ref(), "shpat_0123456789abcdef");
    assert_eq!(config.timeout(), Duration::from_secs(5));

    let client = GraphqlClient::new(&config).unwrap();
    assert_eq!(client.api_version(), &ApiVersion::V2025_10);
    assert_eq!(
        client.endpoint(),
        "https://my-store.myshopify.com/admin/api/2025-10/graphql.json"
    );
}

#[test]
fn test_api_host_replaces_shop_in_endpoint() {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .access_token(AccessToken::new("shpat_0123456789abcdef").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:9999/").unwrap())
        .build()
        .unwrap();

    let client = GraphqlClient::new(&config).unwrap();
    assert_eq!(
        client.endpoint(),
        "http://127.0.0.1:9999/admin/api/2026-01/graphql.json"
    );
}

#[test]
fn test_config_without_token_is_rejected() {
    let result = AdminConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "access_token"
        })
    ));
}

#[test]
fn test_debug_output_never_contains_token() {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .access_token(AccessToken::new("shpat_supersecretvalue").unwrap())
        .build()
        .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("supersecret"));
}

// ============================================================================
// Credential resolution
// ============================================================================

#[test]
fn test_setup_then_resolve_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = CredentialsFile::at(dir.path().join("nested").join("config.json"));

    file.save(&StoredCredentials {
        shop: "file-store".to_string(),
        access_token: "shpat_file_token_0001".to_string(),
    })
    .unwrap();

    let resolved = credentials::resolve(lookup(&[]), &file).unwrap();
    assert_eq!(resolved.source, CredentialSource::ConfigFile);
    assert_eq!(resolved.shop.as_ref(), "file-store.myshopify.com");
    assert_eq!(resolved.access_token.as_ref(), "shpat_file_token_0001");

    file.clear().unwrap();
    assert!(matches!(
        credentials::resolve(lookup(&[]), &file),
        Err(ConfigError::NotAuthenticated)
    ));
}

#[test]
fn test_alias_env_vars_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    let file = CredentialsFile::at(dir.path().join("config.json"));

    let resolved = credentials::resolve(
        lookup(&[
            ("SHOPIFY_STORE", "alias-store"),
            ("SHOPIFY_API_TOKEN", "shpat_alias_token_0001"),
        ]),
        &file,
    )
    .unwrap();

    assert_eq!(resolved.source, CredentialSource::Environment);
    assert_eq!(resolved.shop.as_ref(), "alias-store.myshopify.com");
}

#[test]
fn test_half_configured_environment_falls_back_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = CredentialsFile::at(dir.path().join("config.json"));
    file.save(&StoredCredentials {
        shop: "file-store".to_string(),
        access_token: "shpat_file_token_0001".to_string(),
    })
    .unwrap();

    let resolved =
        credentials::resolve(lookup(&[("SHOPIFY_SHOP", "env-store")]), &file).unwrap();

    assert_eq!(resolved.source, CredentialSource::ConfigFile);
    assert_eq!(resolved.shop.as_ref(), "file-store.myshopify.com");
}
