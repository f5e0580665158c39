//! Discounts of every type, listed through `discountNodes`.
//!
//! A discount ID does not say whether it belongs to a code or an automatic
//! discount, and each kind has its own deactivation mutation.
//! [`DiscountNode::deactivate`] therefore tries the code mutation first and
//! falls back to the automatic one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdVars, UserErrorsPayload};
use crate::admin::user_errors::resolve_user_errors;
use crate::admin::{Connection, DiscountKind, PageRequest};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_DISCOUNTS: &str = r"
query ListDiscounts($first: Int!, $after: String, $query: String) {
  discountNodes(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id
        discount {
          __typename
          ... on DiscountCodeBasic { title status startsAt endsAt asyncUsageCount }
          ... on DiscountCodeBxgy { title status startsAt endsAt asyncUsageCount }
          ... on DiscountCodeFreeShipping { title status startsAt endsAt asyncUsageCount }
          ... on DiscountCodeApp { title status startsAt endsAt asyncUsageCount }
          ... on DiscountAutomaticBasic { title status startsAt endsAt asyncUsageCount }
          ... on DiscountAutomaticBxgy { title status startsAt endsAt asyncUsageCount }
          ... on DiscountAutomaticFreeShipping { title status startsAt endsAt }
          ... on DiscountAutomaticApp { title status startsAt endsAt }
        }
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const DEACTIVATE_CODE: &str = r"
mutation discountCodeDeactivate($id: ID!) {
  discountCodeDeactivate(id: $id) {
    codeDiscountNode { id }
    userErrors { field message }
  }
}";

const DEACTIVATE_AUTOMATIC: &str = r"
mutation discountAutomaticDeactivate($id: ID!) {
  discountAutomaticDeactivate(id: $id) {
    automaticDiscountNode { id }
    userErrors { field message }
  }
}";

/// A discount of any type and its ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscountNode {
    /// Global ID of the discount node.
    pub id: String,
    /// The discount itself.
    pub discount: Discount,
}

/// The fields shared by all discount types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Discount {
    /// The concrete discount type.
    #[serde(rename = "__typename")]
    pub kind: DiscountKind,
    /// The discount title shown to merchants.
    pub title: String,
    /// `ACTIVE`, `EXPIRED` or `SCHEDULED`.
    pub status: String,
    /// When the discount becomes active.
    pub starts_at: Option<DateTime<Utc>>,
    /// When the discount expires; `None` if it never does.
    pub ends_at: Option<DateTime<Utc>>,
    /// Not selected for every automatic type.
    pub async_usage_count: Option<i64>,
}

/// Which mutation deactivated a discount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeactivatedAs {
    /// `discountCodeDeactivate` succeeded.
    Code,
    /// `discountCodeDeactivate` failed and `discountAutomaticDeactivate`
    /// succeeded.
    Automatic,
}

impl DiscountNode {
    /// Lists one page of discounts of all types.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_DISCOUNTS, page, "discountNodes").await
    }

    /// Deactivates a code discount.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if `id` is not an active code
    /// discount.
    pub async fn deactivate_code(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::DiscountCodeNode, id);
        let payload: UserErrorsPayload = client
            .fetch(DEACTIVATE_CODE, &IdVars { id: &gid }, "discountCodeDeactivate")
            .await?;
        resolve_user_errors(payload.user_errors)
    }

    /// Deactivates an automatic discount.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if `id` is not an active
    /// automatic discount.
    pub async fn deactivate_automatic(
        client: &GraphqlClient,
        id: &str,
    ) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::DiscountAutomaticNode, id);
        let payload: UserErrorsPayload = client
            .fetch(
                DEACTIVATE_AUTOMATIC,
                &IdVars { id: &gid },
                "discountAutomaticDeactivate",
            )
            .await?;
        resolve_user_errors(payload.user_errors)
    }

    /// Deactivates a discount of unknown kind.
    ///
    /// Tries [`deactivate_code`](Self::deactivate_code); only if that fails,
    /// for any reason, tries [`deactivate_automatic`](Self::deactivate_automatic).
    /// Sends at most two requests.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::DiscountDeactivation`] holding both failures
    /// when both attempts fail.
    pub async fn deactivate(
        client: &GraphqlClient,
        id: &str,
    ) -> Result<DeactivatedAs, GraphqlError> {
        let code_error = match Self::deactivate_code(client, id).await {
            Ok(()) => return Ok(DeactivatedAs::Code),
            Err(error) => error,
        };

        tracing::debug!(
            id,
            error = %code_error,
            "Code discount deactivation failed, trying automatic"
        );

        match Self::deactivate_automatic(client, id).await {
            Ok(()) => Ok(DeactivatedAs::Automatic),
            Err(automatic_error) => Err(GraphqlError::DiscountDeactivation {
                code: Box::new(code_error),
                automatic: Box::new(automatic_error),
            }),
        }
    }
}
