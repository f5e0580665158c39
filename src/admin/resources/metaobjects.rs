//! Metaobject definitions and entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_DEFINITIONS: &str = r"
query ListMetaobjectDefinitions($first: Int!) {
  metaobjectDefinitions(first: $first) {
    edges {
      cursor
      node { id name type description }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const LIST_METAOBJECTS: &str = r"
query ListMetaobjects($type: String!, $first: Int!, $after: String, $query: String) {
  metaobjects(type: $type, first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id handle type updatedAt
        fields { key value type }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_METAOBJECT: &str = r"
query GetMetaobject($id: ID!) {
  metaobject(id: $id) {
    id handle type updatedAt
    fields { key value type }
  }
}";

const CREATE_METAOBJECT: &str = r"
mutation metaobjectCreate($metaobject: MetaobjectCreateInput!) {
  metaobjectCreate(metaobject: $metaobject) {
    metaobject { id handle type updatedAt fields { key value type } }
    userErrors { field message }
  }
}";

const UPDATE_METAOBJECT: &str = r"
mutation metaobjectUpdate($id: ID!, $metaobject: MetaobjectUpdateInput!) {
  metaobjectUpdate(id: $id, metaobject: $metaobject) {
    metaobject { id handle type updatedAt fields { key value type } }
    userErrors { field message }
  }
}";

const DELETE_METAOBJECT: &str = r"
mutation metaobjectDelete($id: ID!) {
  metaobjectDelete(id: $id) {
    deletedId
    userErrors { field message }
  }
}";

/// The schema of a metaobject type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetaobjectDefinition {
    /// Global ID.
    pub id: String,
    /// The definition name.
    pub name: String,
    /// The type handle used to list entries.
    #[serde(rename = "type")]
    pub kind: String,
    /// What the definition is for.
    pub description: Option<String>,
}

/// An entry of a metaobject type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metaobject {
    /// Global ID.
    pub id: String,
    /// The unique metaobject handle.
    pub handle: String,
    /// The definition type this metaobject belongs to.
    #[serde(rename = "type")]
    pub kind: String,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Field values, in definition order.
    pub fields: Vec<MetaobjectField>,
}

impl Metaobject {
    /// Returns the value of the field `key`, if set.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .and_then(|field| field.value.as_deref())
    }
}

/// One field of a [`Metaobject`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetaobjectField {
    /// The field key.
    pub key: String,
    /// The stored value; `None` when unset.
    pub value: Option<String>,
    /// The field type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A field value to write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaobjectFieldInput {
    /// The field key.
    pub key: String,
    /// The value to store.
    pub value: String,
}

impl MetaobjectFieldInput {
    /// Creates a field input.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Handle and field values for creating or updating a metaobject.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetaobjectInput {
    /// Generated from the display name when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Fields to set; omitted fields keep their value.
    pub fields: Vec<MetaobjectFieldInput>,
}

#[derive(Serialize)]
struct FirstVars {
    first: u32,
}

#[derive(Serialize)]
struct TypeVars<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    page: &'a PageRequest,
}

#[derive(Serialize)]
struct CreateInput<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    input: &'a MetaobjectInput,
}

#[derive(Serialize)]
struct CreateVars<'a> {
    metaobject: CreateInput<'a>,
}

#[derive(Serialize)]
struct UpdateVars<'a> {
    id: &'a str,
    metaobject: &'a MetaobjectInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaobjectPayload {
    metaobject: Option<Metaobject>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl MetaobjectDefinition {
    /// Lists the first `first` metaobject definitions.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        first: u32,
    ) -> Result<Connection<Self>, GraphqlError> {
        client
            .fetch(LIST_DEFINITIONS, &FirstVars { first }, "metaobjectDefinitions")
            .await
    }
}

impl Metaobject {
    /// Lists one page of metaobjects of type `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        kind: &str,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client
            .fetch(LIST_METAOBJECTS, &TypeVars { kind, page }, "metaobjects")
            .await
    }

    /// Fetches a metaobject.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no metaobject has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Metaobject, id);
        let metaobject: Option<Self> = client
            .fetch(GET_METAOBJECT, &IdVars { id: &gid }, "metaobject")
            .await?;
        metaobject.ok_or(GraphqlError::NotFound {
            resource: "metaobject",
            id: gid,
        })
    }

    /// Creates a metaobject of type `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn create(
        client: &GraphqlClient,
        kind: &str,
        input: &MetaobjectInput,
    ) -> Result<Self, GraphqlError> {
        let vars = CreateVars {
            metaobject: CreateInput { kind, input },
        };
        let payload: MetaobjectPayload = client
            .fetch(CREATE_METAOBJECT, &vars, "metaobjectCreate")
            .await?;
        require_entity(payload.metaobject, payload.user_errors, "metaobject")
    }

    /// Updates the fields (and optionally the handle) of a metaobject.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn update(
        client: &GraphqlClient,
        id: &str,
        input: &MetaobjectInput,
    ) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Metaobject, id);
        let vars = UpdateVars {
            id: &gid,
            metaobject: input,
        };
        let payload: MetaobjectPayload = client
            .fetch(UPDATE_METAOBJECT, &vars, "metaobjectUpdate")
            .await?;
        require_entity(payload.metaobject, payload.user_errors, "metaobject")
    }

    /// Deletes a metaobject.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Metaobject, id);
        let payload: UserErrorsPayload = client
            .fetch(DELETE_METAOBJECT, &IdVars { id: &gid }, "metaobjectDelete")
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}
