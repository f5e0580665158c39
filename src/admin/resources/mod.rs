//! Typed Admin API resources.
//!
//! Every resource is a plain data type with associated async functions that
//! take a [`GraphqlClient`](crate::clients::GraphqlClient) by reference.
//! IDs may be passed short (`"123"`) or fully qualified; they are qualified
//! with the resource's type before sending. Unselected fields keep their
//! `Default` values.

mod analytics;
pub(crate) mod common;
mod collections;
mod customers;
mod discounts;
mod fulfillments;
mod inventory;
mod markets;
mod metafields;
mod metaobjects;
mod orders;
mod products;
mod shop;
mod webhooks;

pub use analytics::{run_shopifyql, ShopifyqlColumn, ShopifyqlTable};
pub use collections::{Collection, CollectionInput, Count};
pub use common::{MailingAddress, Money, MoneyBag};
pub use customers::{Customer, CustomerInput};
pub use discounts::{DeactivatedAs, Discount, DiscountNode};
pub use fulfillments::{
    AssignedLocation, Fulfillment, FulfillmentDestination, FulfillmentInput, FulfillmentOrder,
    FulfillmentOrderLineItem, LineItemRef, TrackingInfo,
};
pub use inventory::{
    InventoryAdjustment, InventoryItem, InventoryLevel, InventoryQuantity, Location,
    LocationAddress,
};
pub use markets::{Market, MarketRegion};
pub use metafields::{Metafield, MetafieldSetInput};
pub use metaobjects::{
    Metaobject, MetaobjectDefinition, MetaobjectField, MetaobjectFieldInput, MetaobjectInput,
};
pub use orders::{LineItem, Order, OrderCancelInput, OrderCustomer};
pub use products::{Product, ProductInput, ProductVariant, VariantInput};
pub use shop::{Domain, Shop, ShopPlan};
pub use webhooks::{WebhookInput, WebhookSubscription};
