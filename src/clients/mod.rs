//! HTTP and GraphQL client types for Admin API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client that POSTs JSON with the access
//!   token, user agent and timeout applied
//! - [`HttpResponse`]: a response with a status below 400
//! - [`HttpError`]: transport-level failures
//! - [`graphql::GraphqlClient`]: the GraphQL layer every resource operation uses
//! - [`graphql::GraphqlError`]: the classified error of a GraphQL call
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::HttpClient;
//!
//! let client = HttpClient::new("/admin/api/2026-01", &config)?;
//! let response = client
//!     .post_json("graphql.json", &serde_json::json!({ "query": "{ shop { name } }" }))
//!     .await?;
//! ```

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLI_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{ErrorTier, GraphqlClient, GraphqlError};
