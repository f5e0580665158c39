//! Integration tests for the GraphQL client against a mock Admin API.
//!
//! These tests verify the request shape and how every response is classified
//! into a transport, protocol or decode failure.

use std::time::Duration;

use serde_json::{json, Value};
use shopify_admin::clients::HttpError;
use shopify_admin::{
    AccessToken, AdminConfig, ErrorTier, GraphqlClient, GraphqlError, HostUrl, ShopDomain,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/admin/api/2026-01/graphql.json";

fn client_with_timeout(server: &MockServer, timeout: Duration) -> GraphqlClient {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test_token_0001").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .timeout(timeout)
        .build()
        .unwrap();
    GraphqlClient::new(&config).unwrap()
}

fn client(server: &MockServer) -> GraphqlClient {
    client_with_timeout(server, Duration::from_secs(5))
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_request_posts_document_with_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("X-Shopify-Access-Token", "shpat_test_token_0001"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "query": "query { shop { name } }"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "shop": { "name": "Demo" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = client(&server)
        .execute("query { shop { name } }", None)
        .await
        .unwrap();

    assert_eq!(data["shop"]["name"], "Demo");
}

#[tokio::test]
async fn test_variables_are_omitted_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    client(&server)
        .execute("query { shop { name } }", None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("variables").is_none());
}

#[tokio::test]
async fn test_missing_data_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let data = client(&server).execute("query { shop { id } }", None).await.unwrap();
    assert_eq!(data, Value::Null);
}

// ============================================================================
// Transport tier
// ============================================================================

#[tokio::test]
async fn test_server_error_is_transport_even_with_graphql_errors_in_body() {
    let server = MockServer::start().await;
    let body = r#"{"errors":[{"message":"Internal error"}]}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    let error = client(&server)
        .execute("query { shop { id } }", None)
        .await
        .unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Transport);
    match error {
        GraphqlError::Http(HttpError::Response(response)) => {
            assert_eq!(response.code, 500);
            assert_eq!(response.body, body);
        }
        other => panic!("expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_message_includes_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("[API] Invalid API key or access token"),
        )
        .mount(&server)
        .await;

    let error = client(&server)
        .execute("query { shop { id } }", None)
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "HTTP 401: [API] Invalid API key or access token"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": {} }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let error = client_with_timeout(&server, Duration::from_millis(200))
        .execute("query { shop { id } }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Http(HttpError::Timeout)));
    assert_eq!(error.tier(), ErrorTier::Transport);
}

// ============================================================================
// Protocol and decode tiers
// ============================================================================

#[tokio::test]
async fn test_protocol_errors_are_joined_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Field 'foo' doesn't exist on type 'Shop'", "locations": [{ "line": 1, "column": 9 }] },
                { "message": "Throttled", "extensions": { "code": "THROTTLED" } }
            ]
        })))
        .mount(&server)
        .await;

    let error = client(&server)
        .execute("query { shop { foo } }", None)
        .await
        .unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Protocol);
    assert_eq!(
        error.to_string(),
        "Field 'foo' doesn't exist on type 'Shop'; Throttled"
    );
    let errors = error.protocol_errors().unwrap();
    assert_eq!(errors[0].locations[0].column, 9);
}

#[tokio::test]
async fn test_errors_win_over_partial_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "shop": { "name": "Demo" } },
            "errors": [{ "message": "Access denied for field" }]
        })))
        .mount(&server)
        .await;

    let error = client(&server)
        .execute("query { shop { name } }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Protocol(_)));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client(&server)
        .execute("query { shop { id } }", None)
        .await
        .unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Decode);
    assert!(matches!(
        error,
        GraphqlError::Decode { ref context, .. } if context == "response envelope"
    ));
}
