//! Admin API resources and the shared shapes they are built from.
//!
//! # Overview
//!
//! - [`Connection`], [`Edge`], [`PageInfo`]: one page of a list result
//! - [`PageRequest`]: page size, cursor and search filter of a list call
//! - [`UserError`]: a business-rule rejection inside a mutation payload
//! - [`WebhookEndpoint`], [`DiscountKind`]: decoders for `__typename`-tagged
//!   payloads
//! - [`resources`]: the typed resources (products, orders, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::admin::{Order, OrderCancelInput, PageRequest};
//!
//! let orders = Order::list(&client, &PageRequest::new(10).query("financial_status:paid")).await?;
//! for order in orders.nodes() {
//!     println!("{} {}", order.name, order.total_price_set.shop_money);
//! }
//!
//! Order::cancel(&client, "1001", &OrderCancelInput::default()).await?;
//! ```

mod connection;
mod polymorphic;
pub mod resources;
pub(crate) mod user_errors;

pub use connection::{Connection, Edge, PageInfo, PageRequest};
pub use polymorphic::{DiscountKind, WebhookEndpoint};
pub use resources::*;
pub use user_errors::{resolve_user_errors, UserError};
