//! GraphQL client implementation for the Shopify Admin API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! documents and classifying their outcome.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::graphql::envelope::{Envelope, GraphqlRequest};
use crate::clients::graphql::GraphqlError;
use crate::clients::HttpClient;
use crate::config::{AdminConfig, ApiVersion};

/// GraphQL client for the Shopify Admin API.
///
/// Every call is a single POST to `/admin/api/{version}/graphql.json`. The
/// outcome is classified as a transport, protocol or successful response;
/// mutation payloads are checked for user errors by the resource operations
/// in [`crate::admin`].
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_admin::{AdminConfig, GraphqlClient};
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&config)?;
///
/// let data = client.execute("query { shop { name } }", None).await?;
/// println!("Shop name: {}", data["shop"]["name"]);
///
/// let data = client.execute(
///     "query GetProduct($id: ID!) { product(id: $id) { title } }",
///     Some(json!({ "id": "gid://shopify/Product/123" })),
/// ).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &AdminConfig) -> Result<Self, GraphqlError> {
        let api_version = config.api_version().clone();

        if !api_version.is_stable() {
            tracing::debug!("GraphQL client using non-stable API version {}", api_version);
        }

        // Construct base path: /admin/api/{version}
        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}/graphql.json",
            self.http_client.base_uri(),
            self.http_client.base_path()
        )
    }

    /// Executes a GraphQL document and returns the raw `data` payload.
    ///
    /// The payload is [`Value::Null`] when the server sent none.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GraphqlError::Http`] for network failures, timeouts and statuses
    ///   of 400 or above, whatever the body contains
    /// - [`GraphqlError::Decode`] if a successful body is not an envelope
    /// - [`GraphqlError::Protocol`] if the envelope's `errors` is non-empty
    pub async fn execute(
        &self,
        document: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest {
            query: document,
            variables: variables.as_ref(),
        };

        let response = self.http_client.post_json("graphql.json", &body).await?;
        Envelope::parse(&response.body)?.into_data()
    }

    /// Executes a document with typed variables and decodes `data[root]`.
    ///
    /// Use `Option<T>` for roots that the API returns as `null` when the
    /// entity does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Encode`] if the variables cannot be
    /// serialized, any error from [`execute`](Self::execute), or
    /// [`GraphqlError::Decode`] if `data[root]` does not match `T`.
    pub async fn fetch<T, V>(
        &self,
        document: &str,
        variables: &V,
        root: &str,
    ) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned,
        V: Serialize + ?Sized,
    {
        let variables = serde_json::to_value(variables).map_err(GraphqlError::Encode)?;
        let data = self.execute(document, Some(variables)).await?;
        Self::decode_root(data, root)
    }

    /// Decodes `data[root]` into `T`. A missing root decodes from `null`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decode`] if the value does not match `T`.
    pub fn decode_root<T>(mut data: Value, root: &str) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned,
    {
        let value = data
            .get_mut(root)
            .map(Value::take)
            .unwrap_or(Value::Null);

        serde_json::from_value(value).map_err(|source| GraphqlError::Decode {
            context: root.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain};
    use serde::Deserialize;
    use serde_json::json;

    fn config() -> AdminConfig {
        AdminConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_version_in_endpoint() {
        let client = GraphqlClient::new(&config()).unwrap();

        assert_eq!(client.api_version(), &ApiVersion::latest());
        assert_eq!(
            client.endpoint(),
            "https://test-shop.myshopify.com/admin/api/2026-01/graphql.json"
        );
    }

    #[test]
    fn test_decode_root_extracts_named_field() {
        #[derive(Deserialize)]
        struct Shop {
            name: String,
        }

        let shop: Shop =
            GraphqlClient::decode_root(json!({ "shop": { "name": "Demo" } }), "shop").unwrap();
        assert_eq!(shop.name, "Demo");
    }

    #[test]
    fn test_decode_root_missing_field_is_null() {
        let value: Option<Value> = GraphqlClient::decode_root(json!({}), "product").unwrap();
        assert!(value.is_none());

        let value: Option<Value> = GraphqlClient::decode_root(Value::Null, "product").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_decode_root_shape_mismatch_is_decode_error() {
        let result: Result<Vec<String>, _> =
            GraphqlClient::decode_root(json!({ "shop": { "name": "Demo" } }), "shop");

        match result {
            Err(GraphqlError::Decode { context, .. }) => assert_eq!(context, "shop"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
