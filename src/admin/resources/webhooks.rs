//! Webhook subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError, WebhookEndpoint};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_WEBHOOKS: &str = r"
query ListWebhooks($first: Int!, $after: String, $query: String) {
  webhookSubscriptions(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id topic format createdAt updatedAt
        endpoint {
          __typename
          ... on WebhookHttpEndpoint { callbackUrl }
          ... on WebhookEventBridgeEndpoint { arn }
          ... on WebhookPubSubEndpoint { pubSubProject pubSubTopic }
        }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const CREATE_WEBHOOK: &str = r"
mutation webhookSubscriptionCreate($topic: WebhookSubscriptionTopic!, $webhookSubscription: WebhookSubscriptionInput!) {
  webhookSubscriptionCreate(topic: $topic, webhookSubscription: $webhookSubscription) {
    webhookSubscription {
      id topic format createdAt updatedAt
      endpoint {
        __typename
        ... on WebhookHttpEndpoint { callbackUrl }
      }
    }
    userErrors { field message }
  }
}";

const DELETE_WEBHOOK: &str = r"
mutation webhookSubscriptionDelete($id: ID!) {
  webhookSubscriptionDelete(id: $id) {
    deletedWebhookSubscriptionId
    userErrors { field message }
  }
}";

/// A subscription delivering events of one topic to an endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookSubscription {
    /// Global ID.
    pub id: String,
    /// Topic enum, e.g. `ORDERS_CREATE`.
    pub topic: String,
    /// `JSON` or `XML`.
    pub format: String,
    /// Where deliveries are sent; `None` if not selected.
    pub endpoint: Option<WebhookEndpoint>,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// An HTTPS subscription to create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookInput {
    /// Topic enum, e.g. `ORDERS_CREATE`.
    pub topic: String,
    /// The HTTPS URL deliveries are posted to.
    pub callback_url: String,
    /// `JSON` when `None`.
    pub format: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateVars<'a> {
    topic: &'a str,
    webhook_subscription: SubscriptionInput<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionInput<'a> {
    callback_url: &'a str,
    format: &'a str,
}

impl<'a> From<&'a WebhookInput> for CreateVars<'a> {
    fn from(input: &'a WebhookInput) -> Self {
        Self {
            topic: &input.topic,
            webhook_subscription: SubscriptionInput {
                callback_url: &input.callback_url,
                format: input
                    .format
                    .as_deref()
                    .filter(|format| !format.is_empty())
                    .unwrap_or("JSON"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePayload {
    webhook_subscription: Option<WebhookSubscription>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl WebhookSubscription {
    /// Lists one page of subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client
            .fetch(LIST_WEBHOOKS, page, "webhookSubscriptions")
            .await
    }

    /// Subscribes an HTTPS callback to a topic.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the subscription is rejected.
    pub async fn create(
        client: &GraphqlClient,
        input: &WebhookInput,
    ) -> Result<Self, GraphqlError> {
        let payload: CreatePayload = client
            .fetch(
                CREATE_WEBHOOK,
                &CreateVars::from(input),
                "webhookSubscriptionCreate",
            )
            .await?;
        require_entity(
            payload.webhook_subscription,
            payload.user_errors,
            "webhook subscription",
        )
    }

    /// Deletes a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::WebhookSubscription, id);
        let payload: UserErrorsPayload = client
            .fetch(DELETE_WEBHOOK, &IdVars { id: &gid }, "webhookSubscriptionDelete")
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_variables_default_format_to_json() {
        let input = WebhookInput {
            topic: "ORDERS_CREATE".to_string(),
            callback_url: "https://example.com/hooks".to_string(),
            format: None,
        };

        assert_eq!(
            serde_json::to_value(CreateVars::from(&input)).unwrap(),
            json!({
                "topic": "ORDERS_CREATE",
                "webhookSubscription": {
                    "callbackUrl": "https://example.com/hooks",
                    "format": "JSON"
                }
            })
        );
    }

    #[test]
    fn test_subscription_decodes_each_endpoint_kind() {
        let page: Connection<WebhookSubscription> = serde_json::from_value(json!({
            "edges": [
                { "cursor": "a", "node": {
                    "id": "gid://shopify/WebhookSubscription/1",
                    "topic": "ORDERS_CREATE",
                    "format": "JSON",
                    "endpoint": { "__typename": "WebhookHttpEndpoint", "callbackUrl": "https://example.com" }
                } },
                { "cursor": "b", "node": {
                    "id": "gid://shopify/WebhookSubscription/2",
                    "topic": "PRODUCTS_UPDATE",
                    "format": "JSON",
                    "endpoint": { "__typename": "WebhookPubSubEndpoint", "pubSubProject": "p", "pubSubTopic": "t" }
                } }
            ],
            "pageInfo": { "hasNextPage": false }
        }))
        .unwrap();

        let addresses: Vec<_> = page
            .nodes()
            .map(|hook| hook.endpoint.as_ref().and_then(WebhookEndpoint::address))
            .collect();
        assert_eq!(
            addresses,
            [
                Some("https://example.com".to_string()),
                Some("pubsub://p:t".to_string())
            ]
        );
    }
}
