//! Global ID (GID) helpers.
//!
//! The Admin API identifies every object with a global ID of the form
//! `gid://shopify/<ResourceType>/<id>`. Users type the bare numeric form;
//! [`qualify`] builds the global form and [`short_form`] recovers the bare
//! one for display.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::gid::{qualify, short_form, ResourceType};
//!
//! let gid = qualify(ResourceType::Product, "1234567890");
//! assert_eq!(gid, "gid://shopify/Product/1234567890");
//! assert_eq!(short_form(&gid), "1234567890");
//!
//! // Already qualified IDs pass through untouched.
//! assert_eq!(qualify(ResourceType::Product, &gid), gid);
//! ```

use std::fmt;

/// Prefix shared by every fully-qualified ID.
pub const GID_PREFIX: &str = "gid://";

const NAMESPACE: &str = "shopify";

/// The resource types that commands accept bare IDs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `Product`
    Product,
    /// `ProductVariant`
    ProductVariant,
    /// `Collection`
    Collection,
    /// `Order`
    Order,
    /// `Customer`
    Customer,
    /// `Location`
    Location,
    /// `InventoryItem`
    InventoryItem,
    /// `Metafield`
    Metafield,
    /// `Metaobject`
    Metaobject,
    /// `Market`
    Market,
    /// `WebhookSubscription`
    WebhookSubscription,
    /// `DiscountCodeNode`
    DiscountCodeNode,
    /// `DiscountAutomaticNode`
    DiscountAutomaticNode,
    /// `FulfillmentOrder`
    FulfillmentOrder,
}

impl ResourceType {
    /// Returns the type name as it appears in a global ID.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::ProductVariant => "ProductVariant",
            Self::Collection => "Collection",
            Self::Order => "Order",
            Self::Customer => "Customer",
            Self::Location => "Location",
            Self::InventoryItem => "InventoryItem",
            Self::Metafield => "Metafield",
            Self::Metaobject => "Metaobject",
            Self::Market => "Market",
            Self::WebhookSubscription => "WebhookSubscription",
            Self::DiscountCodeNode => "DiscountCodeNode",
            Self::DiscountAutomaticNode => "DiscountAutomaticNode",
            Self::FulfillmentOrder => "FulfillmentOrder",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `id` is already a fully-qualified global ID.
#[must_use]
pub fn is_qualified(id: &str) -> bool {
    id.starts_with(GID_PREFIX)
}

/// Builds the global ID for `id`, or returns `id` unchanged if it is
/// already qualified.
///
/// The bare ID is not validated; the API rejects malformed IDs.
#[must_use]
pub fn qualify(resource: ResourceType, id: &str) -> String {
    if is_qualified(id) {
        return id.to_string();
    }
    format!("{GID_PREFIX}{NAMESPACE}/{resource}/{id}")
}

/// Returns the part after the last `/`, or the input when there is no `/`
/// or nothing follows it.
#[must_use]
pub fn short_form(gid: &str) -> &str {
    match gid.rfind('/') {
        Some(idx) if idx + 1 < gid.len() => &gid[idx + 1..],
        _ => gid,
    }
}
