//! The shop the client is authenticated against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{GraphqlClient, GraphqlError};

const GET_SHOP: &str = r"
{
  shop {
    id name email myshopifyDomain
    primaryDomain { url host }
    currencyCode countryCode timezoneAbbreviation createdAt
    plan { displayName shopifyPlus }
  }
}";

/// Store-level information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shop {
    /// Global ID.
    pub id: String,
    /// The shop name.
    pub name: String,
    /// The shop owner's contact email.
    pub email: String,
    /// The permanent `*.myshopify.com` host name.
    pub myshopify_domain: String,
    /// The domain customers see.
    pub primary_domain: Domain,
    /// The shop currency, e.g. `USD`.
    pub currency_code: String,
    /// The country of the shop address.
    pub country_code: String,
    /// The shop time zone, e.g. `EST`.
    pub timezone_abbreviation: String,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// The Shopify plan the shop is on.
    pub plan: ShopPlan,
}

/// A domain attached to the shop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Domain {
    /// The full URL, including scheme.
    pub url: String,
    /// The host name.
    pub host: String,
}

/// The shop's subscription plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopPlan {
    /// The plan name shown to merchants.
    pub display_name: String,
    /// Whether the shop is on Shopify Plus.
    pub shopify_plus: bool,
}

impl Shop {
    /// Fetches the shop. The query takes no variables.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the shop cannot be
    /// decoded.
    pub async fn get(client: &GraphqlClient) -> Result<Self, GraphqlError> {
        let data = client.execute(GET_SHOP, None).await?;
        GraphqlClient::decode_root(data, "shop")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_decodes_nested_objects() {
        let shop: Shop = GraphqlClient::decode_root(
            json!({ "shop": {
                "id": "gid://shopify/Shop/1",
                "name": "Test Shop",
                "myshopifyDomain": "test-shop.myshopify.com",
                "primaryDomain": { "url": "https://shop.example.com", "host": "shop.example.com" },
                "currencyCode": "CAD",
                "plan": { "displayName": "Basic", "shopifyPlus": false }
            } }),
            "shop",
        )
        .unwrap();

        assert_eq!(shop.primary_domain.host, "shop.example.com");
        assert_eq!(shop.plan.display_name, "Basic");
        assert!(shop.created_at.is_none());
    }
}
