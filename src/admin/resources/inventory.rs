//! Locations, inventory items and stock levels.

use serde::{Deserialize, Serialize};

use super::common::InputVars;
use crate::admin::user_errors::resolve_user_errors;
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_LOCATIONS: &str = r"
query ListLocations($first: Int!) {
  locations(first: $first) {
    edges {
      cursor
      node {
        id name isActive
        address { address1 city country }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const LIST_INVENTORY_ITEMS: &str = r"
query ListInventoryItems($first: Int!, $after: String, $query: String) {
  inventoryItems(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node { id sku tracked requiresShipping }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const LIST_INVENTORY_LEVELS: &str = r#"
query ListInventoryLevels($id: ID!, $first: Int!) {
  location(id: $id) {
    inventoryLevels(first: $first) {
      edges {
        cursor
        node {
          id
          quantities(names: ["available", "on_hand"]) { name quantity }
          item { id sku }
        }
      }
      pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
    }
  }
}"#;

const ADJUST_QUANTITIES: &str = r"
mutation inventoryAdjustQuantities($input: InventoryAdjustQuantitiesInput!) {
  inventoryAdjustQuantities(input: $input) {
    inventoryAdjustmentGroup {
      reason
      changes {
        name delta quantityAfterChange
        item { id sku }
        location { name }
      }
    }
    userErrors { field message }
  }
}";

/// A place where inventory is stocked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// Global ID.
    pub id: String,
    /// The location name.
    pub name: String,
    /// Whether the location can stock inventory.
    pub is_active: bool,
    /// The location address.
    pub address: LocationAddress,
}

/// The address of a [`Location`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationAddress {
    /// The first line of the street address.
    pub address1: Option<String>,
    /// The city.
    pub city: Option<String>,
    /// The country name.
    pub country: Option<String>,
}

/// A stock-keeping unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryItem {
    /// Global ID.
    pub id: String,
    /// The SKU of the variant this item tracks.
    pub sku: Option<String>,
    /// Whether Shopify tracks quantities for this item.
    pub tracked: bool,
    /// Whether the item is physically shipped.
    pub requires_shipping: bool,
}

/// Stock of one item at one location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryLevel {
    /// Global ID.
    pub id: String,
    /// Named quantities, e.g. `available` and `on_hand`.
    pub quantities: Vec<InventoryQuantity>,
    /// The inventory item the level belongs to.
    pub item: InventoryItem,
}

/// A named quantity, e.g. `available` or `on_hand`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryQuantity {
    /// The quantity name, e.g. `available`.
    pub name: String,
    /// Units; may be negative.
    pub quantity: i64,
}

impl InventoryLevel {
    /// Returns the quantity named `name`, if it was selected.
    #[must_use]
    pub fn quantity(&self, name: &str) -> Option<i64> {
        self.quantities
            .iter()
            .find(|q| q.name == name)
            .map(|q| q.quantity)
    }
}

/// A change of the `available` quantity of an item at a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryAdjustment {
    /// Inventory item ID, short or global.
    pub inventory_item_id: String,
    /// Location ID, short or global.
    pub location_id: String,
    /// Signed change; negative values remove stock.
    pub delta: i64,
    /// Reason code; `correction` when `None`.
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct AdjustInput<'a> {
    reason: &'a str,
    name: &'static str,
    changes: [Change; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Change {
    inventory_item_id: String,
    location_id: String,
    delta: i64,
}

#[derive(Serialize)]
struct FirstVars {
    first: u32,
}

#[derive(Serialize)]
struct LevelVars<'a> {
    id: &'a str,
    first: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LocationLevels {
    inventory_levels: Connection<InventoryLevel>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AdjustPayload {
    user_errors: Vec<UserError>,
}

impl Location {
    /// Lists the first `first` locations.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        first: u32,
    ) -> Result<Connection<Self>, GraphqlError> {
        client
            .fetch(LIST_LOCATIONS, &FirstVars { first }, "locations")
            .await
    }
}

impl InventoryItem {
    /// Lists one page of inventory items.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_INVENTORY_ITEMS, page, "inventoryItems").await
    }
}

impl InventoryLevel {
    /// Lists the inventory levels stocked at a location.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if the location does not exist.
    pub async fn list(
        client: &GraphqlClient,
        location_id: &str,
        first: u32,
    ) -> Result<Connection<Self>, GraphqlError> {
        let gid = qualify(ResourceType::Location, location_id);
        let location: Option<LocationLevels> = client
            .fetch(
                LIST_INVENTORY_LEVELS,
                &LevelVars { id: &gid, first },
                "location",
            )
            .await?;
        location
            .map(|location| location.inventory_levels)
            .ok_or(GraphqlError::NotFound {
                resource: "location",
                id: gid,
            })
    }

    /// Adjusts the `available` quantity of an item at a location.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the adjustment is rejected.
    pub async fn adjust(
        client: &GraphqlClient,
        adjustment: &InventoryAdjustment,
    ) -> Result<(), GraphqlError> {
        let input = adjust_input(adjustment);
        let payload: AdjustPayload = client
            .fetch(
                ADJUST_QUANTITIES,
                &InputVars { input },
                "inventoryAdjustQuantities",
            )
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}

fn adjust_input(adjustment: &InventoryAdjustment) -> AdjustInput<'_> {
    AdjustInput {
        reason: adjustment
            .reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or("correction"),
        name: "available",
        changes: [Change {
            inventory_item_id: qualify(ResourceType::InventoryItem, &adjustment.inventory_item_id),
            location_id: qualify(ResourceType::Location, &adjustment.location_id),
            delta: adjustment.delta,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adjust_input_defaults_reason_and_qualifies_ids() {
        let adjustment = InventoryAdjustment {
            inventory_item_id: "11".to_string(),
            location_id: "gid://shopify/Location/22".to_string(),
            delta: -3,
            reason: None,
        };

        assert_eq!(
            serde_json::to_value(adjust_input(&adjustment)).unwrap(),
            json!({
                "reason": "correction",
                "name": "available",
                "changes": [{
                    "inventoryItemId": "gid://shopify/InventoryItem/11",
                    "locationId": "gid://shopify/Location/22",
                    "delta": -3
                }]
            })
        );
    }

    #[test]
    fn test_inventory_level_quantity_lookup() {
        let level: InventoryLevel = serde_json::from_value(json!({
            "id": "gid://shopify/InventoryLevel/1",
            "quantities": [
                { "name": "available", "quantity": 4 },
                { "name": "on_hand", "quantity": 6 }
            ],
            "item": { "id": "gid://shopify/InventoryItem/11", "sku": "SOCK-1" }
        }))
        .unwrap();

        assert_eq!(level.quantity("available"), Some(4));
        assert_eq!(level.quantity("on_hand"), Some(6));
        assert_eq!(level.quantity("committed"), None);
    }
}
