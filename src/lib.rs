//! # Shopify Admin CLI
//!
//! A typed client for the Shopify Admin GraphQL API and the library behind
//! the `shopify-admin` command-line tool.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - Validated newtypes for the shop domain and access token
//! - Credential resolution from environment variables or a config file via
//!   [`config::credentials`]
//! - An async GraphQL client that classifies every failure as a transport,
//!   protocol, domain or decode error ([`ErrorTier`])
//! - Typed resources for products, orders, customers, inventory, metafields,
//!   metaobjects, webhooks, discounts, fulfillments, markets and analytics
//! - Cursor pagination through [`admin::Connection`] and
//!   [`admin::PageRequest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_admin::{AccessToken, AdminConfig, ApiVersion, ShopDomain};
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_0123456789abcdef").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_admin::{AdminConfig, GraphqlClient};
//! use shopify_admin::admin::{PageRequest, Product};
//!
//! let client = GraphqlClient::new(&config)?;
//!
//! let page = Product::list(&client, &PageRequest::new(25)).await?;
//! for product in page.nodes() {
//!     println!("{} {}", product.id, product.title);
//! }
//! if let Some(cursor) = page.next_cursor() {
//!     let next = Product::list(&client, &PageRequest::new(25).after(cursor)).await?;
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use shopify_admin::{ErrorTier, GraphqlError};
//! use shopify_admin::admin::{Product, ProductInput};
//!
//! match Product::create(&client, &ProductInput::default()).await {
//!     Ok(product) => println!("Created {}", product.id),
//!     Err(error) if error.tier() == ErrorTier::Domain => {
//!         for user_error in error.user_errors().unwrap_or_default() {
//!             eprintln!("{:?}: {}", user_error.field, user_error.message);
//!         }
//!     }
//!     Err(error) => eprintln!("Error: {error}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries; every failure reaches the caller

pub mod admin;
pub mod clients;
pub mod config;
pub mod error;
pub mod gid;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AdminConfig, AdminConfigBuilder, ApiVersion, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ErrorTier, GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};
