//! Customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::common::{IdVars, InputVars, MailingAddress, Money, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_CUSTOMERS: &str = r"
query ListCustomers($first: Int!, $after: String, $query: String) {
  customers(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id firstName lastName email phone state
        numberOfOrders amountSpent { amount currencyCode }
        createdAt
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_CUSTOMER: &str = r"
query GetCustomer($id: ID!) {
  customer(id: $id) {
    id firstName lastName email phone state tags
    numberOfOrders amountSpent { amount currencyCode }
    createdAt updatedAt
    defaultAddress {
      address1 address2 city province zip country
    }
  }
}";

const CREATE_CUSTOMER: &str = r"
mutation customerCreate($input: CustomerInput!) {
  customerCreate(input: $input) {
    customer { id firstName lastName email phone state createdAt }
    userErrors { field message }
  }
}";

const UPDATE_CUSTOMER: &str = r"
mutation customerUpdate($input: CustomerInput!) {
  customerUpdate(input: $input) {
    customer { id firstName lastName email phone state updatedAt }
    userErrors { field message }
  }
}";

const DELETE_CUSTOMER: &str = r"
mutation customerDelete($input: CustomerDeleteInput!) {
  customerDelete(input: $input) {
    deletedCustomerId
    userErrors { field message }
  }
}";

/// A customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    /// Global ID.
    pub id: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// The customer's email address.
    pub email: Option<String>,
    /// The customer's phone number.
    pub phone: Option<String>,
    /// Account state, e.g. `ENABLED`.
    pub state: String,
    /// Tags attached to the customer.
    pub tags: Vec<String>,
    /// Sent by the API as a string-encoded integer.
    pub number_of_orders: String,
    /// Total spent across all orders.
    pub amount_spent: Option<Money>,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// The default shipping address.
    pub default_address: Option<MailingAddress>,
}

impl Customer {
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

/// Fields for creating or updating a customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    /// Set by [`Customer::update`]; leave empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number, in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Sent as one comma-separated string.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub tags: Vec<String>,
}

fn comma_joined<S>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&tags.join(","))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerPayload {
    customer: Option<Customer>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl Customer {
    /// Lists one page of customers.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_CUSTOMERS, page, "customers").await
    }

    /// Fetches a customer with their default address.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no customer has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Customer, id);
        let customer: Option<Self> = client
            .fetch(GET_CUSTOMER, &IdVars { id: &gid }, "customer")
            .await?;
        customer.ok_or(GraphqlError::NotFound {
            resource: "customer",
            id: gid,
        })
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn create(
        client: &GraphqlClient,
        input: &CustomerInput,
    ) -> Result<Self, GraphqlError> {
        let payload: CustomerPayload = client
            .fetch(CREATE_CUSTOMER, &InputVars { input }, "customerCreate")
            .await?;
        require_entity(payload.customer, payload.user_errors, "customer")
    }

    /// Updates the customer `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn update(
        client: &GraphqlClient,
        id: &str,
        input: &CustomerInput,
    ) -> Result<Self, GraphqlError> {
        let input = CustomerInput {
            id: Some(qualify(ResourceType::Customer, id)),
            ..input.clone()
        };
        let payload: CustomerPayload = client
            .fetch(UPDATE_CUSTOMER, &InputVars { input }, "customerUpdate")
            .await?;
        require_entity(payload.customer, payload.user_errors, "customer")
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected,
    /// e.g. because the customer has orders.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Customer, id);
        let payload: UserErrorsPayload = client
            .fetch(
                DELETE_CUSTOMER,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "customerDelete",
            )
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}
