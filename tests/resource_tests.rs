//! Integration tests for the typed resource operations.
//!
//! These tests verify variable encoding, user-error handling, pagination and
//! the discount deactivation fallback against a mock Admin API.

use serde_json::{json, Value};
use shopify_admin::admin::{
    run_shopifyql, DeactivatedAs, DiscountKind, DiscountNode, FulfillmentOrder, InventoryAdjustment,
    InventoryLevel, Order, OrderCancelInput, PageRequest, Product, ProductInput, WebhookEndpoint,
    WebhookSubscription,
};
use shopify_admin::{
    AccessToken, AdminConfig, ErrorTier, GraphqlClient, GraphqlError, HostUrl, ShopDomain,
};
use wiremock::matchers::{body_partial_json, body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GraphqlClient {
    let config = AdminConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test_token_0001").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&config).unwrap()
}

fn data(payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": payload }))
}

async fn request_variables(server: &MockServer, index: usize) -> Value {
    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[index].body).unwrap();
    body["variables"].clone()
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_first_page_omits_cursor_and_reports_next_cursor() {
    let server = MockServer::start().await;
    let edges: Vec<Value> = (1..=50)
        .map(|n| {
            json!({
                "cursor": format!("c{n}"),
                "node": { "id": format!("gid://shopify/Product/{n}"), "title": format!("P{n}"), "status": "ACTIVE" }
            })
        })
        .collect();
    Mock::given(method("POST"))
        .and(body_string_contains("ListProducts"))
        .respond_with(data(json!({
            "products": {
                "edges": edges,
                "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "startCursor": "c1", "endCursor": "c50" }
            }
        })))
        .mount(&server)
        .await;

    let page = Product::list(&client(&server), &PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.len(), 50);
    assert_eq!(page.edges[49].node.title, "P50");
    assert_eq!(page.next_cursor(), Some("c50"));
    assert_eq!(request_variables(&server, 0).await, json!({ "first": 50 }));
}

#[tokio::test]
async fn test_continuation_sends_cursor_and_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "first": 10, "after": "c50", "query": "vendor:Acme" }
        })))
        .respond_with(data(json!({
            "products": {
                "edges": [],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": true, "startCursor": null, "endCursor": null }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = Product::list(
        &client(&server),
        &PageRequest::new(10).after("c50").query("vendor:Acme"),
    )
    .await
    .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.next_cursor(), None);
}

// ============================================================================
// Lookups and mutations
// ============================================================================

#[tokio::test]
async fn test_get_qualifies_numeric_id_and_maps_null_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "id": "gid://shopify/Product/42" }
        })))
        .respond_with(data(json!({ "product": null })))
        .expect(1)
        .mount(&server)
        .await;

    let error = Product::get(&client(&server), "42").await.unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Domain);
    assert_eq!(error.to_string(), "product not found: gid://shopify/Product/42");
}

#[tokio::test]
async fn test_user_errors_take_precedence_over_returned_entity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("productCreate"))
        .respond_with(data(json!({
            "productCreate": {
                "product": { "id": "gid://shopify/Product/1", "title": "" },
                "userErrors": [
                    { "field": ["title"], "message": "Title can't be blank" },
                    { "field": null, "message": "Handle is invalid" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let input = ProductInput {
        title: Some(String::new()),
        ..Default::default()
    };
    let error = Product::create(&client(&server), &input).await.unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Domain);
    assert_eq!(error.to_string(), "Title can't be blank; Handle is invalid");
    let user_errors = error.user_errors().unwrap();
    assert_eq!(user_errors[0].field, ["title"]);
    assert!(user_errors[1].field.is_empty());
}

#[tokio::test]
async fn test_mutation_without_entity_or_errors_is_missing_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({
            "productCreate": { "product": null, "userErrors": [] }
        })))
        .mount(&server)
        .await;

    let error = Product::create(&client(&server), &ProductInput::default())
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::MissingPayload { .. }));
}

#[tokio::test]
async fn test_order_cancel_reads_cancel_specific_error_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {
                "orderId": "gid://shopify/Order/9",
                "reason": "CUSTOMER",
                "refund": true,
                "restock": false,
                "notifyCustomer": false
            }
        })))
        .respond_with(data(json!({
            "orderCancel": {
                "job": null,
                "orderCancelUserErrors": [{ "field": ["orderId"], "message": "Order has already been cancelled" }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = OrderCancelInput {
        reason: "CUSTOMER".to_string(),
        refund: true,
        ..Default::default()
    };
    let error = Order::cancel(&client(&server), "9", &options)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Order has already been cancelled");
}

#[tokio::test]
async fn test_inventory_adjust_sends_single_available_change() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "input": {
                "reason": "correction",
                "name": "available",
                "changes": [{
                    "inventoryItemId": "gid://shopify/InventoryItem/5",
                    "locationId": "gid://shopify/Location/6",
                    "delta": -3
                }]
            }}
        })))
        .respond_with(data(json!({
            "inventoryAdjustQuantities": { "inventoryAdjustmentGroup": null, "userErrors": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adjustment = InventoryAdjustment {
        inventory_item_id: "5".to_string(),
        location_id: "6".to_string(),
        delta: -3,
        reason: None,
    };
    InventoryLevel::adjust(&client(&server), &adjustment)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fulfillment_orders_of_missing_order_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({ "order": null })))
        .mount(&server)
        .await;

    let error = FulfillmentOrder::list(&client(&server), "77").await.unwrap_err();

    assert!(matches!(
        error,
        GraphqlError::NotFound { resource: "order", ref id } if id == "gid://shopify/Order/77"
    ));
}

// ============================================================================
// Polymorphic payloads
// ============================================================================

#[tokio::test]
async fn test_webhook_endpoints_decode_by_typename() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({
            "webhookSubscriptions": {
                "edges": [
                    { "cursor": "a", "node": {
                        "id": "gid://shopify/WebhookSubscription/1", "topic": "ORDERS_CREATE", "format": "JSON",
                        "endpoint": { "__typename": "WebhookHttpEndpoint", "callbackUrl": "https://example.com/hook" }
                    }},
                    { "cursor": "b", "node": {
                        "id": "gid://shopify/WebhookSubscription/2", "topic": "ORDERS_PAID", "format": "JSON",
                        "endpoint": { "__typename": "WebhookSomethingNew" }
                    }}
                ],
                "pageInfo": { "hasNextPage": false }
            }
        })))
        .mount(&server)
        .await;

    let page = WebhookSubscription::list(&client(&server), &PageRequest::default())
        .await
        .unwrap();
    let endpoints: Vec<_> = page.nodes().map(|w| w.endpoint.clone()).collect();

    assert_eq!(
        endpoints[0],
        Some(WebhookEndpoint::Http {
            callback_url: "https://example.com/hook".to_string()
        })
    );
    assert_eq!(endpoints[1], Some(WebhookEndpoint::Unknown));
}

#[tokio::test]
async fn test_discount_list_reads_kind_from_typename() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({
            "discountNodes": {
                "edges": [{ "cursor": "a", "node": {
                    "id": "gid://shopify/DiscountCodeNode/3",
                    "discount": { "__typename": "DiscountCodeBasic", "title": "SPRING10", "status": "ACTIVE" }
                }}],
                "pageInfo": { "hasNextPage": false }
            }
        })))
        .mount(&server)
        .await;

    let page = DiscountNode::list(&client(&server), &PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.edges[0].node.discount.kind, DiscountKind::CodeBasic);
}

// ============================================================================
// Discount deactivation fallback
// ============================================================================

#[tokio::test]
async fn test_deactivate_stops_after_code_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountCodeDeactivate"))
        .respond_with(data(json!({
            "discountCodeDeactivate": { "codeDiscountNode": { "id": "x" }, "userErrors": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountAutomaticDeactivate"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let kind = DiscountNode::deactivate(&client(&server), "12").await.unwrap();
    assert_eq!(kind, DeactivatedAs::Code);
}

#[tokio::test]
async fn test_deactivate_falls_back_to_automatic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountCodeDeactivate"))
        .respond_with(data(json!({
            "discountCodeDeactivate": {
                "codeDiscountNode": null,
                "userErrors": [{ "field": ["id"], "message": "Discount does not exist" }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountAutomaticDeactivate"))
        .and(body_partial_json(json!({
            "variables": { "id": "gid://shopify/DiscountAutomaticNode/12" }
        })))
        .respond_with(data(json!({
            "discountAutomaticDeactivate": { "automaticDiscountNode": { "id": "y" }, "userErrors": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kind = DiscountNode::deactivate(&client(&server), "12").await.unwrap();
    assert_eq!(kind, DeactivatedAs::Automatic);
}

#[tokio::test]
async fn test_deactivate_reports_both_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountCodeDeactivate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("discountAutomaticDeactivate"))
        .respond_with(data(json!({
            "discountAutomaticDeactivate": {
                "automaticDiscountNode": null,
                "userErrors": [{ "field": ["id"], "message": "Discount does not exist" }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = DiscountNode::deactivate(&client(&server), "12")
        .await
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("HTTP 503: unavailable"));
    assert!(message.contains("Discount does not exist"));
    assert_eq!(error.tier(), ErrorTier::Domain);
}

// ============================================================================
// Analytics
// ============================================================================

#[tokio::test]
async fn test_shopifyql_returns_table_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "query": "FROM sales SHOW total_sales SINCE -7d" }
        })))
        .respond_with(data(json!({
            "shopifyqlQuery": {
                "parseErrors": [],
                "tableData": {
                    "columnDefinitions": [
                        { "name": "day", "dataType": "DAY_TIMESTAMP", "displayName": "Day" },
                        { "name": "total_sales", "dataType": "MONEY", "displayName": "" }
                    ],
                    "rows": [{ "day": "2024-03-01", "total_sales": 120.5 }]
                }
            }
        })))
        .mount(&server)
        .await;

    let table = run_shopifyql(&client(&server), "FROM sales SHOW total_sales SINCE -7d")
        .await
        .unwrap();

    assert_eq!(table.columns[1].header(), "total_sales");
    assert_eq!(table.string_rows(), vec![vec!["2024-03-01", "120.5"]]);
}

#[tokio::test]
async fn test_shopifyql_parse_errors_are_domain_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data(json!({
            "shopifyqlQuery": {
                "parseErrors": [{ "code": "SYNTAX_ERROR", "message": "Unexpected token" }],
                "tableData": null
            }
        })))
        .mount(&server)
        .await;

    let error = run_shopifyql(&client(&server), "FROM sales SHOWW")
        .await
        .unwrap_err();

    assert_eq!(error.tier(), ErrorTier::Domain);
    assert_eq!(error.to_string(), "[SYNTAX_ERROR] Unexpected token");
}
