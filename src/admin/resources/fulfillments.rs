//! Fulfillment orders and fulfillments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::IdVars;
use crate::admin::user_errors::require_entity;
use crate::admin::{Connection, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_FULFILLMENT_ORDERS: &str = r"
query ListFulfillmentOrders($id: ID!) {
  order(id: $id) {
    fulfillmentOrders(first: 50) {
      edges {
        cursor
        node {
          id status requestStatus fulfillAt
          assignedLocation { name }
          destination { firstName lastName address1 city country zip }
          lineItems(first: 50) {
            edges {
              node {
                id remainingQuantity totalQuantity
                lineItem { id title sku }
              }
            }
          }
        }
      }
      pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
    }
  }
}";

const CREATE_FULFILLMENT: &str = r"
mutation fulfillmentCreateV2($fulfillment: FulfillmentV2Input!) {
  fulfillmentCreateV2(fulfillment: $fulfillment) {
    fulfillment {
      id status createdAt updatedAt
      trackingInfo { company number url }
    }
    userErrors { field message }
  }
}";

/// A group of order line items to be fulfilled from one location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FulfillmentOrder {
    /// Global ID.
    pub id: String,
    /// E.g. `OPEN`, `IN_PROGRESS`, `CLOSED`.
    pub status: String,
    /// Fulfillment service request status, e.g. `UNSUBMITTED`.
    pub request_status: String,
    /// When the order should be fulfilled.
    pub fulfill_at: Option<DateTime<Utc>>,
    /// The location expected to fulfill the order.
    pub assigned_location: AssignedLocation,
    /// Where the items are shipped.
    pub destination: Option<FulfillmentDestination>,
    /// The items to fulfill.
    pub line_items: Connection<FulfillmentOrderLineItem>,
}

/// The location a fulfillment order ships from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssignedLocation {
    /// The location name.
    pub name: String,
}

/// Where a fulfillment order ships to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FulfillmentDestination {
    /// The recipient's first name.
    pub first_name: Option<String>,
    /// The recipient's last name.
    pub last_name: Option<String>,
    /// The first line of the street address.
    pub address1: Option<String>,
    /// The city.
    pub city: Option<String>,
    /// The country name.
    pub country: Option<String>,
    /// The postal code.
    pub zip: Option<String>,
}

/// One line of a fulfillment order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FulfillmentOrderLineItem {
    /// Global ID.
    pub id: String,
    /// Units not yet fulfilled.
    pub remaining_quantity: i64,
    /// Units ordered.
    pub total_quantity: i64,
    /// The order line item this entry fulfills.
    pub line_item: LineItemRef,
}

/// The order line a fulfillment order line refers to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LineItemRef {
    /// Global ID.
    pub id: String,
    /// The product title at the time of the order.
    pub title: String,
    /// The variant SKU.
    pub sku: Option<String>,
}

/// A shipment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fulfillment {
    /// Global ID.
    pub id: String,
    /// Fulfillment status, e.g. `SUCCESS`.
    pub status: String,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Carrier tracking details.
    pub tracking_info: Vec<TrackingInfo>,
}

impl Fulfillment {
    /// Returns the carrier of the first tracking entry.
    #[must_use]
    pub fn tracking_company(&self) -> Option<&str> {
        self.tracking_info
            .first()
            .and_then(|info| info.company.as_deref())
    }

    /// Returns every tracking number.
    #[must_use]
    pub fn tracking_numbers(&self) -> Vec<&str> {
        self.tracking_info
            .iter()
            .filter_map(|info| info.number.as_deref())
            .collect()
    }
}

/// Carrier tracking details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackingInfo {
    /// The shipping carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// The tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// The tracking page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A fulfillment of all remaining items of one fulfillment order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FulfillmentInput {
    /// Fulfillment order ID, short or global.
    pub fulfillment_order_id: String,
    /// The shipping carrier.
    pub tracking_company: Option<String>,
    /// The tracking number.
    pub tracking_number: Option<String>,
    /// Only sent together with a company or number.
    pub tracking_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FulfillmentV2Input {
    line_items_by_fulfillment_order: [FulfillmentOrderRef; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking_info: Option<TrackingInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FulfillmentOrderRef {
    fulfillment_order_id: String,
}

#[derive(Serialize)]
struct CreateVars {
    fulfillment: FulfillmentV2Input,
}

impl From<&FulfillmentInput> for FulfillmentV2Input {
    fn from(input: &FulfillmentInput) -> Self {
        let company = non_empty(input.tracking_company.as_deref());
        let number = non_empty(input.tracking_number.as_deref());
        let tracking_info = (company.is_some() || number.is_some()).then(|| TrackingInfo {
            company,
            number,
            url: non_empty(input.tracking_url.as_deref()),
        });

        Self {
            line_items_by_fulfillment_order: [FulfillmentOrderRef {
                fulfillment_order_id: qualify(
                    ResourceType::FulfillmentOrder,
                    &input.fulfillment_order_id,
                ),
            }],
            tracking_info,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OrderFulfillmentOrders {
    fulfillment_orders: Connection<FulfillmentOrder>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePayload {
    fulfillment: Option<Fulfillment>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl FulfillmentOrder {
    /// Lists the first 50 fulfillment orders of an order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if the order does not exist.
    pub async fn list(
        client: &GraphqlClient,
        order_id: &str,
    ) -> Result<Connection<Self>, GraphqlError> {
        let gid = qualify(ResourceType::Order, order_id);
        let order: Option<OrderFulfillmentOrders> = client
            .fetch(LIST_FULFILLMENT_ORDERS, &IdVars { id: &gid }, "order")
            .await?;
        order
            .map(|order| order.fulfillment_orders)
            .ok_or(GraphqlError::NotFound {
                resource: "order",
                id: gid,
            })
    }
}

impl Fulfillment {
    /// Fulfills the remaining items of a fulfillment order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the fulfillment is rejected.
    pub async fn create(
        client: &GraphqlClient,
        input: &FulfillmentInput,
    ) -> Result<Self, GraphqlError> {
        let vars = CreateVars {
            fulfillment: input.into(),
        };
        let payload: CreatePayload = client
            .fetch(CREATE_FULFILLMENT, &vars, "fulfillmentCreateV2")
            .await?;
        require_entity(payload.fulfillment, payload.user_errors, "fulfillment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tracking_info_omitted_without_company_or_number() {
        let input = FulfillmentInput {
            fulfillment_order_id: "31".to_string(),
            tracking_url: Some("https://track.example.com/1".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(FulfillmentV2Input::from(&input)).unwrap(),
            json!({ "lineItemsByFulfillmentOrder": [
                { "fulfillmentOrderId": "gid://shopify/FulfillmentOrder/31" }
            ] })
        );
    }

    #[test]
    fn test_tracking_info_sent_with_number() {
        let input = FulfillmentInput {
            fulfillment_order_id: "31".to_string(),
            tracking_number: Some("1Z999".to_string()),
            tracking_url: Some("https://track.example.com/1Z999".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(FulfillmentV2Input::from(&input)).unwrap();
        assert_eq!(
            value["trackingInfo"],
            json!({ "number": "1Z999", "url": "https://track.example.com/1Z999" })
        );
    }

    #[test]
    fn test_fulfillment_tracking_helpers() {
        let fulfillment: Fulfillment = serde_json::from_value(json!({
            "id": "gid://shopify/Fulfillment/1",
            "status": "SUCCESS",
            "trackingInfo": [
                { "company": "UPS", "number": "1Z1", "url": null },
                { "company": null, "number": "1Z2", "url": null }
            ]
        }))
        .unwrap();

        assert_eq!(fulfillment.tracking_company(), Some("UPS"));
        assert_eq!(fulfillment.tracking_numbers(), ["1Z1", "1Z2"]);
    }
}
