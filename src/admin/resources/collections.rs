//! Custom and smart collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, InputVars, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_COLLECTIONS: &str = r"
query ListCollections($first: Int!, $after: String, $query: String) {
  collections(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id title handle updatedAt
        productsCount { count }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_COLLECTION: &str = r"
query GetCollection($id: ID!) {
  collection(id: $id) {
    id title handle description updatedAt
    productsCount { count }
  }
}";

const CREATE_COLLECTION: &str = r"
mutation collectionCreate($input: CollectionInput!) {
  collectionCreate(input: $input) {
    collection { id title handle updatedAt }
    userErrors { field message }
  }
}";

const UPDATE_COLLECTION: &str = r"
mutation collectionUpdate($input: CollectionInput!) {
  collectionUpdate(input: $input) {
    collection { id title handle updatedAt }
    userErrors { field message }
  }
}";

const DELETE_COLLECTION: &str = r"
mutation collectionDelete($input: CollectionDeleteInput!) {
  collectionDelete(input: $input) {
    deletedCollectionId
    userErrors { field message }
  }
}";

/// A collection of products.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    /// Global ID.
    pub id: String,
    /// The collection title.
    pub title: String,
    /// The unique, URL-friendly collection name.
    pub handle: String,
    /// Plain-text description.
    pub description: String,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of products in the collection.
    pub products_count: Option<Count>,
}

impl Collection {
    /// Returns the number of products, or 0 when not selected.
    #[must_use]
    pub fn product_count(&self) -> u64 {
        self.products_count.as_ref().map_or(0, |c| c.count)
    }
}

/// A `{ count }` object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Count {
    /// The count.
    pub count: u64,
}

/// Fields for creating or updating a collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInput {
    /// Set by [`Collection::update`]; leave empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionPayload {
    collection: Option<Collection>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl Collection {
    /// Lists one page of collections.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_COLLECTIONS, page, "collections").await
    }

    /// Fetches a collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no collection has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Collection, id);
        let collection: Option<Self> = client
            .fetch(GET_COLLECTION, &IdVars { id: &gid }, "collection")
            .await?;
        collection.ok_or(GraphqlError::NotFound {
            resource: "collection",
            id: gid,
        })
    }

    /// Creates a custom collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn create(
        client: &GraphqlClient,
        input: &CollectionInput,
    ) -> Result<Self, GraphqlError> {
        let payload: CollectionPayload = client
            .fetch(CREATE_COLLECTION, &InputVars { input }, "collectionCreate")
            .await?;
        require_entity(payload.collection, payload.user_errors, "collection")
    }

    /// Updates the collection `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn update(
        client: &GraphqlClient,
        id: &str,
        input: &CollectionInput,
    ) -> Result<Self, GraphqlError> {
        let input = CollectionInput {
            id: Some(qualify(ResourceType::Collection, id)),
            ..input.clone()
        };
        let payload: CollectionPayload = client
            .fetch(UPDATE_COLLECTION, &InputVars { input }, "collectionUpdate")
            .await?;
        require_entity(payload.collection, payload.user_errors, "collection")
    }

    /// Deletes a collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Collection, id);
        let payload: UserErrorsPayload = client
            .fetch(
                DELETE_COLLECTION,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "collectionDelete",
            )
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_product_count() {
        let collection: Collection = serde_json::from_value(json!({
            "id": "gid://shopify/Collection/3",
            "title": "Winter",
            "productsCount": { "count": 12 }
        }))
        .unwrap();
        assert_eq!(collection.product_count(), 12);

        assert_eq!(Collection::default().product_count(), 0);
    }

    #[test]
    fn test_collection_input_maps_description_to_html() {
        let input = CollectionInput {
            title: Some("Winter".to_string()),
            description_html: Some("<p>Cold</p>".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "title": "Winter", "descriptionHtml": "<p>Cold</p>" })
        );
    }
}
