//! Products and product variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::admin::{PageRequest, Product, ProductInput};
//!
//! let page = Product::list(&client, &PageRequest::new(10).query("status:draft")).await?;
//!
//! let product = Product::create(&client, &ProductInput {
//!     title: Some("Wool Socks".to_string()),
//!     status: Some("draft".to_string()),
//!     tags: vec!["winter".to_string()],
//!     ..Default::default()
//! }).await?;
//!
//! Product::delete(&client, &product.id).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{upper_case, IdVars, InputVars, UserErrorsPayload};
use crate::admin::user_errors::{require_entity, resolve_user_errors};
use crate::admin::{Connection, PageRequest, UserError};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::gid::{qualify, ResourceType};

const LIST_PRODUCTS: &str = r"
query ListProducts($first: Int!, $after: String, $query: String) {
  products(first: $first, after: $after, query: $query) {
    edges {
      cursor
      node {
        id title status totalInventory
        vendor productType createdAt updatedAt
      }
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}";

const GET_PRODUCT: &str = r"
query GetProduct($id: ID!) {
  product(id: $id) {
    id title status handle description totalInventory
    vendor productType tags createdAt updatedAt
    variants(first: 100) {
      edges {
        node {
          id title price compareAtPrice sku
          inventoryQuantity barcode weight weightUnit
        }
      }
    }
  }
}";

const CREATE_PRODUCT: &str = r"
mutation productCreate($input: ProductInput!) {
  productCreate(input: $input) {
    product { id title status handle vendor productType createdAt }
    userErrors { field message }
  }
}";

const UPDATE_PRODUCT: &str = r"
mutation productUpdate($input: ProductInput!) {
  productUpdate(input: $input) {
    product { id title status handle vendor productType updatedAt }
    userErrors { field message }
  }
}";

const DELETE_PRODUCT: &str = r"
mutation productDelete($input: ProductDeleteInput!) {
  productDelete(input: $input) {
    deletedProductId
    userErrors { field message }
  }
}";

const GET_VARIANT: &str = r"
query GetVariant($id: ID!) {
  productVariant(id: $id) {
    id title price compareAtPrice sku
    inventoryQuantity barcode weight weightUnit
    createdAt updatedAt
  }
}";

const UPDATE_VARIANT: &str = r"
mutation productVariantUpdate($input: ProductVariantInput!) {
  productVariantUpdate(input: $input) {
    productVariant { id title price sku inventoryQuantity updatedAt }
    userErrors { field message }
  }
}";

/// A product. Fields not selected by a query keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Global ID.
    pub id: String,
    /// The product title.
    pub title: String,
    /// `ACTIVE`, `ARCHIVED` or `DRAFT`.
    pub status: String,
    /// The unique, URL-friendly product name.
    pub handle: String,
    /// Plain-text description.
    pub description: String,
    /// Stock summed across all variants.
    pub total_inventory: i64,
    /// The name of the product's vendor.
    pub vendor: String,
    /// A merchant-defined product category.
    pub product_type: String,
    /// Tags attached to the product.
    pub tags: Vec<String>,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Only populated by [`Product::get`] (first 100 variants).
    pub variants: Connection<ProductVariant>,
}

/// A purchasable variant of a product.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductVariant {
    /// Global ID.
    pub id: String,
    /// The variant title, built from its option values.
    pub title: String,
    /// The price, as a decimal string.
    pub price: String,
    /// The original price shown as struck through.
    pub compare_at_price: Option<String>,
    /// The stock keeping unit.
    pub sku: Option<String>,
    /// Available units across locations.
    pub inventory_quantity: Option<i64>,
    /// The barcode, UPC or ISBN.
    pub barcode: Option<String>,
    /// The shipping weight.
    pub weight: Option<f64>,
    /// The unit of `weight`, e.g. `KILOGRAMS`.
    pub weight_unit: Option<String>,
    /// When the record was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for creating or updating a product. `None` fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Set by [`Product::update`]; leave empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New vendor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// New product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Sent upper-cased, so `draft` is accepted.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "upper_case")]
    pub status: Option<String>,
    /// New description, as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    /// Replaces all tags when non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Fields for updating a variant. `None` fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInput {
    /// Set by [`ProductVariant::update`]; leave empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New price, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// New SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// New barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    product: Option<Product>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantPayload {
    product_variant: Option<ProductVariant>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl Product {
    /// Lists one page of products.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn list(
        client: &GraphqlClient,
        page: &PageRequest,
    ) -> Result<Connection<Self>, GraphqlError> {
        client.fetch(LIST_PRODUCTS, page, "products").await
    }

    /// Fetches a product with its first 100 variants.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no product has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::Product, id);
        let product: Option<Self> = client
            .fetch(GET_PRODUCT, &IdVars { id: &gid }, "product")
            .await?;
        product.ok_or(GraphqlError::NotFound {
            resource: "product",
            id: gid,
        })
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn create(
        client: &GraphqlClient,
        input: &ProductInput,
    ) -> Result<Self, GraphqlError> {
        let payload: ProductPayload = client
            .fetch(CREATE_PRODUCT, &InputVars { input }, "productCreate")
            .await?;
        require_entity(payload.product, payload.user_errors, "product")
    }

    /// Updates the product `id` with the set fields of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn update(
        client: &GraphqlClient,
        id: &str,
        input: &ProductInput,
    ) -> Result<Self, GraphqlError> {
        let input = ProductInput {
            id: Some(qualify(ResourceType::Product, id)),
            ..input.clone()
        };
        let payload: ProductPayload = client
            .fetch(UPDATE_PRODUCT, &InputVars { input }, "productUpdate")
            .await?;
        require_entity(payload.product, payload.user_errors, "product")
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the deletion is rejected.
    pub async fn delete(client: &GraphqlClient, id: &str) -> Result<(), GraphqlError> {
        let gid = qualify(ResourceType::Product, id);
        let payload: UserErrorsPayload = client
            .fetch(
                DELETE_PRODUCT,
                &InputVars {
                    input: IdVars { id: &gid },
                },
                "productDelete",
            )
            .await?;
        resolve_user_errors(payload.user_errors)
    }
}

impl ProductVariant {
    /// Fetches a variant.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::NotFound`] if no variant has this ID.
    pub async fn get(client: &GraphqlClient, id: &str) -> Result<Self, GraphqlError> {
        let gid = qualify(ResourceType::ProductVariant, id);
        let variant: Option<Self> = client
            .fetch(GET_VARIANT, &IdVars { id: &gid }, "productVariant")
            .await?;
        variant.ok_or(GraphqlError::NotFound {
            resource: "variant",
            id: gid,
        })
    }

    /// Updates price, SKU or barcode of the variant `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::UserErrors`] if the input is rejected.
    pub async fn update(
        client: &GraphqlClient,
        id: &str,
        input: &VariantInput,
    ) -> Result<Self, GraphqlError> {
        let input = VariantInput {
            id: Some(qualify(ResourceType::ProductVariant, id)),
            ..input.clone()
        };
        let payload: VariantPayload = client
            .fetch(UPDATE_VARIANT, &InputVars { input }, "productVariantUpdate")
            .await?;
        require_entity(payload.product_variant, payload.user_errors, "variant")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_input_skips_unset_fields_and_upper_cases_status() {
        let input = ProductInput {
            title: Some("Socks".to_string()),
            status: Some("draft".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "title": "Socks", "status": "DRAFT" })
        );
    }

    #[test]
    fn test_product_decodes_with_variants_and_nulls() {
        let product: Product = serde_json::from_value(json!({
            "id": "gid://shopify/Product/1",
            "title": "Socks",
            "status": "ACTIVE",
            "tags": ["winter"],
            "createdAt": "2024-01-15T10:30:00Z",
            "variants": { "edges": [ { "node": {
                "id": "gid://shopify/ProductVariant/2",
                "title": "Default Title",
                "price": "9.00",
                "compareAtPrice": null,
                "sku": null,
                "weight": 0.5
            } } ] }
        }))
        .unwrap();

        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants.edges[0].node.weight, Some(0.5));
        assert!(product.variants.edges[0].node.compare_at_price.is_none());
        assert_eq!(
            product.created_at.map(|t| t.to_rfc3339()),
            Some("2024-01-15T10:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_variant_input_serializes_camel_case() {
        let input = VariantInput {
            id: Some("gid://shopify/ProductVariant/2".to_string()),
            price: Some("12.50".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "id": "gid://shopify/ProductVariant/2", "price": "12.50" })
        );
    }
}
