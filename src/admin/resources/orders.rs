//! Orders and their lifecycle mutations.
//!
//! `orderCancel` and `orderMarkAsPaid` report business-rule failures under
//! `orderCancelUserErrors` and `errors` rather than `userErrors`; both are
//! resolved the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, InputVars, MailingAddress, MoneyBag};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_ORDERS: &str = r"
query ListOrders($first: Int!, $after: String, $query: String) {
  orders(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id name email financialStatus displayFulfillmentStatus
        totalPriceSet { shopMoney { amount currencyCode } }
        createdAt
        customer { firstName lastName }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_ORDER: &str = r"
query GetOrder($id: ID!) {
  order(id: $id) {
    id name email phone
    financialStatus displayFulfillmentStatus
    totalPriceSet { shopMoney { amount currencyCode } }
    subtotalPriceSet { shopMoney { amount currencyCode } }
    totalTaxSet { shopMoney { amount currencyCode } }
    createdAt processedAt note tags
    customer { id firstName lastName email }
    shippingAddress {
      firstName lastName address1 address2
      city province zip country phone
    }
    lineItems(first: 50) {
      edges {
        node {
          id title quantity sku
          originalUnitPriceSet { shopMoney { amount currencyCode } }
        }
      }
    }
  }
}";

const CLOSE_ORDER: &str = r"
mutation orderClose($input: OrderCloseInput!) {
  orderClose(input: $input) {
    order { id name financialStatus displayFulfillmentStatus }
    userErrors { field message }
  }
}";

const CANCEL_ORDER: &str = r"
mutation orderCancel($orderId: ID!, $reason: OrderCancelReason!, $refund: Boolean!, $restock: Boolean!, $notifyCustomer: Boolean!) {
  orderCancel(orderId: $orderId, reason: $reason, refund: $refund, restock: $restock, notifyCustomer: $notifyCustomer) {
    job { id done }
    orderCancelUserErrors { field message }
  }
}";

const MARK_ORDER_PAID: &str = r"
mutation orderMarkAsPaid($input: OrderMarkAsPaidInput!) {
  orderMarkAsPaid(input: $input) {
    order { id name financialStatus }
    errors { field message }
  }
}";

/// An order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    /// Global ID.
    pub id: String,
    /// Display name, e.g. `#1001`.
    pub name: String,
    /// The email the order was placed with.
    pub email: Option<String>,
    /// The phone number the order was placed with.
    pub phone: Option<String>,
    /// Payment status, e.g. `PAID`.
    pub financial_status: Option<String>,
    /// Fulfillment status, e.g. `UNFULFILLED`.
    pub display_fulfillment_status: String,
    /// Total price including tax and shipping.
    pub total_price_set: MoneyBag,
    /// Price of the line items after discounts.
    pub subtotal_price_set: Option<MoneyBag>,
    /// Total tax charged.
    pub total_tax_set: Option<MoneyBag>,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the order was processed.
    pub processed_at: Option<DateTime<Utc>>,
    /// Merchant note on the order.
    pub note: Option<String>,
    /// Tags attached to the order.
    pub tags: Vec<String>,
    /// The customer who placed the order.
    pub customer: Option<OrderCustomer>,
    /// Where the order ships to.
    pub shipping_address: Option<MailingAddress>,
    /// Only populated by [`Order::get`] (first 50 line items).
    pub line_items: Connection<LineItem>,
}

/// The customer attached to an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCustomer {
    /// Global ID.
    pub id: String,
    /// The customer's first name.
    pub first_name: Option<String>,
    /// The customer's last name.
    pub last_name: Option<String>,
    /// The customer's email address.
    pub email: Option<String>,
}

impl OrderCustomer {
    /// Returns "first last", skipping missing parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A line of an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    /// Global ID.
    pub id: String,
    /// The product title at the time of the order.
    pub title: String,
    /// Units ordered.
    pub quantity: i64,
    /// The variant SKU.
    pub sku: Option<String>,
    /// Unit price before discounts.
    pub original_unit_price_set: MoneyBag,
}

/// Options for [`Order::cancel`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelInput {
    /// An `OrderCancelReason`: `CUSTOMER`, `DECLINED`, `FRAUD`,
    /// `INVENTORY`, `STAFF` or `OTHER` (the default).
    pub reason: String,
    /// Refund the payment.
    pub refund: bool,
    /// Return the items to inventory.
    pub restock: bool,
    /// Email the customer. Off by default.
    pub notify_customer: bool,
}

impl Default for OrderCancelInput {
    fn default() -> Self {
        Self {
            reason: "OTHER".to_string(),
            refund: false,
            restock: false,
            notify_customer: false,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelVars<'a> {
    order_id: &'a str,
    #[serde(flatten)]
    options: &'a OrderCancelInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderPayload {
    order: Option<Order>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelPayload {
    #[serde(default)]
    order_cancel_user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
struct MarkAsPaidPayload {
    order: Option<Order>,
    #[serde(default)]
    errors: Vec<UserError>,
}

impl Order {
    /// Lists one page of orders.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_ORDERS, page, "orders").await
    }

    /// Fetches an order with addresses and its first 50 line items.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no order has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Order, id);
        let order: Option<Self> = client
            .fetch(GET_ORDER, &IdVars { id: &gid }, "order")
            .await?;
        order.ok_or(GraphqlError::NotFound {
            resource: "order",
            id: gid,
        })
    }

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the order cannot be closed.
    pub async fn close(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Order, id);
        let payload: OrderPayload = client
            .fetch(
                CLOSE_ORDER,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "orderClose",
            )
            .await?;
        require_entity(payload.order, payload.user_errors, "order")
    }

    /// Starts cancelling an order. Cancellation completes asynchronously.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the order cannot be cancelled.
    pub async fn cancel(
        client: &GraphqlClient,
        id: &str,
        options: &OrderCancelInput,
    ) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Order, id);
        let vars = CancelVars {
            order_id: &gid,
            options,
        };
        let payload: CancelPayload = client.fetch(CANCEL_ORDER, &vars, "orderCancel").await?;
        resolve_user_errors(payload.order_cancel_user_errors)
    }

    /// Marks an order as paid.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the order cannot be marked paid.
    pub async fn mark_as_paid(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Order, id);
        let payload: MarkAsPaidPayload = client
            .fetch(
                MARK_ORDER_PAID,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "orderMarkAsPaid",
            )
            .await?;
        require_entity(payload.order, payload.errors, "order")
    }
}
