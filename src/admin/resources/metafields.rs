//! Metafields attached to any owner resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, InputVars, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_METAFIELDS: &str = r"
query ListMetafields($ownerId: ID!, $first: Int!) {
  metafields(owner: $ownerId, first: $first) {
    edges {
      cursor
      node { id namespace key value type createdAt updatedAt }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_METAFIELD: &str = r"
query GetMetafield($id: ID!) {
  metafield(id: $id) {
    id namespace key value type createdAt updatedAt
  }
}";

const SET_METAFIELDS: &str = r"
mutation metafieldsSet($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields { id namespace key value type updatedAt }
    userErrors { field message }
  }
}";

const DELETE_METAFIELD: &str = r"
mutation metafieldDelete($input: MetafieldDeleteInput!) {
  metafieldDelete(input: $input) {
    deletedId
    userErrors { field message }
  }
}";

/// A typed key/value pair in a namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metafield {
    /// Global ID.
    pub id: String,
    /// The namespace grouping related metafields.
    pub namespace: String,
    /// The key, unique within the namespace.
    pub key: String,
    /// The value, always string-encoded.
    pub value: String,
    /// Metafield type, e.g. `single_line_text_field`.
    #[serde(rename = "type")]
    pub kind: String,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A metafield to create or overwrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldSetInput {
    /// Full global ID of the owner, e.g. `gid://shopify/Product/1`.
    pub owner_id: String,
    /// The namespace to write to.
    pub namespace: String,
    /// The key to write to.
    pub key: String,
    /// The value, encoded as its type requires.
    pub value: String,
    /// The metafield type, e.g. `single_line_text_field`.
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OwnerVars<'a> {
    owner_id: &'a str,
    first: u32,
}

#[derive(Serialize)]
struct SetVars<'a> {
    metafields: [&'a MetafieldSetInput; 1],
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SetPayload {
    metafields: Vec<Metafield>,
    user_errors: Vec<UserError>,
}

impl Metafield {
    /// Lists the metafields of an owner, given by its full global ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        owner_id: &str,
        first: u32,
    ) -> Result<Connection<Self>, GraphqlError> {
        client
            .fetch(LIST_METAFIELDS, &OwnerVars { owner_id, first }, "metafields")
            .await
    }

    /// Fetches a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no metafield has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Metafield, id);
        let metafield: Option<Self> = client
            .fetch(GET_METAFIELD, &IdVars { id: &gid }, "metafield")
            .await?;
        metafield.ok_or(GraphqlError::NotFound {
            resource: "metafield",
            id: gid,
        })
    }

    /// Creates or overwrites a metafield and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the value is rejected.
    pub async fn set(
        client: &GraphqlClient,
        input: &MetafieldSetInput,
    ) -> Result<Self, GraphqlError> {
        let payload: SetPayload = client
            .fetch(
                SET_METAFIELDS,
                &SetVars {
                    metafields: [input],
                },
                "metafieldsSet",
            )
            .await?;
        require_entity(
            payload.metafields.into_iter().next(),
            payload.user_errors,
            "metafield",
        )
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Metafield, id);
        let payload: UserErrorsPayload = client
            .fetch(
                DELETE_METAFIELD,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "metafieldDelete",
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
    fn test_set_variables_wrap_single_input() {
        let input = MetafieldSetInput {
            owner_id: "gid://shopify/Product/1".to_string(),
            namespace: "custom".to_string(),
            key: "care".to_string(),
            value: "Hand wash".to_string(),
            kind: "single_line_text_field".to_string(),
        };

        assert_eq!(
            serde_json::to_value(SetVars {
                metafields: [&input]
            })
            .unwrap(),
            json!({ "metafields": [{
                "ownerId": "gid://shopify/Product/1",
                "namespace": "custom",
                "key": "care",
                "value": "Hand wash",
                "type": "single_line_text_field"
            }] })
        );
    }

    #[test]
    fn test_metafield_type_field_decodes_to_kind() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": "gid://shopify/Metafield/9",
            "namespace": "custom",
            "key": "care",
            "value": "Hand wash",
            "type": "single_line_text_field"
        }))
        .unwrap();
        assert_eq!(metafield.kind, "single_line_text_field");
    }
}
