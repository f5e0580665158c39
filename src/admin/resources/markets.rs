//! Markets.

use serde::{Deserialize, Serialize};

use super::common::IdVars;
use crate::admin::Connection;
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_MARKETS: &str = r"
query ListMarkets($first: Int!) {
  markets(first: $first) {
    edges {
      cursor
      node {
        id name handle enabled primary
        regions(first: 20) { edges { node { name } } }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_MARKET: &str = r"
query GetMarket($id: ID!) {
  market(id: $id) {
    id name handle enabled primary
    regions(first: 50) { edges { node { name } } }
  }
}";

/// A group of regions sharing pricing and languages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Market {
    /// Global ID.
    pub id: String,
    /// The market name.
    pub name: String,
    /// The unique market handle.
    pub handle: String,
    /// Whether the market is active.
    pub enabled: bool,
    /// Whether this is the shop's primary market.
    pub primary: bool,
    /// First 20 regions when listed, first 50 when fetched.
    pub regions: Connection<MarketRegion>,
}

impl Market {
    /// Returns the region names, comma-separated.
    #[must_use]
    pub fn region_names(&self) -> String {
        self.regions
            .nodes()
            .map(|region| region.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A country or region of a market.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketRegion {
    /// The region name, usually a country.
    pub name: String,
}

#[derive(Serialize)]
struct FirstVars {
    first: u32,
}

impl Market {
    /// Lists the first `first` markets.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        first: u32,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_MARKETS, &FirstVars { first }, "markets").await
    }

    /// Fetches a market.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no market has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Market, id);
        let market: Option<Self> = client
            .fetch(GET_MARKET, &IdVars { id: &gid }, "market")
            .await?;
        market.ok_or(GraphqlError::NotFound {
            resource: "market",
            id: gid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_region_names_joined_in_order() {
        let market: Market = serde_json::from_value(json!({
            "id": "gid://shopify/Market/1",
            "name": "North America",
            "enabled": true,
            "regions": { "edges": [
                { "node": { "name": "Canada" } },
                { "node": { "name": "United States" } }
            ] }
        }))
        .unwrap();

        assert_eq!(market.region_names(), "Canada, United States");
        assert!(!market.primary);
    }
}
