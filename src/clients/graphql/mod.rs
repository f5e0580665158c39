//! GraphQL client for the Shopify Admin API.
//!
//! This module turns a query or mutation document plus variables into either
//! the raw `data` payload or a classified error.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: sends documents with `execute()` and decodes typed
//!   roots with `fetch()`
//! - [`GraphqlError`] and [`ErrorTier`]: the transport, protocol, domain and
//!   decode failure levels
//! - [`Envelope`], [`ProtocolError`]: the response envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::GraphqlClient;
//!
//! let client = GraphqlClient::new(&config)?;
//! let data = client.execute("query { shop { name } }", None).await?;
//! println!("Shop name: {}", data["shop"]["name"]);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted once. Network errors, timeouts, 5xx and 429
//! responses are reported to the caller immediately.

mod client;
mod envelope;
mod errors;

pub use client::GraphqlClient;
pub use envelope::{Envelope, GraphqlRequest, ProtocolError, SourceLocation};
pub use errors::{ErrorTier, GraphqlError};
