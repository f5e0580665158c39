//! GraphQL error types for the Admin API.
//!
//! A single call can fail at one of three levels, checked in this order:
//!
//! 1. Transport: the request failed or the status was 400 or above
//!    ([`GraphqlError::Http`]). This wins even if the body carries a GraphQL
//!    `errors` array.
//! 2. Protocol: the envelope's `errors` array is non-empty
//!    ([`GraphqlError::Protocol`]).
//! 3. Domain: a mutation payload carries `userErrors`
//!    ([`GraphqlError::UserErrors`]).
//!
//! A payload that does not match the expected shape is a
//! [`GraphqlError::Decode`]. Use [`GraphqlError::tier`] to tell them apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::graphql::{ErrorTier, GraphqlError};
//!
//! match Product::create(&client, &input).await {
//!     Ok(product) => println!("created {}", product.id),
//!     Err(e) if e.tier() == ErrorTier::Domain => eprintln!("rejected: {e}"),
//!     Err(e) => eprintln!("failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::admin::UserError;
use crate::clients::graphql::envelope::ProtocolError;
use crate::clients::HttpError;

/// The level at which a call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorTier {
    /// Network failure, timeout, or HTTP status of 400 or above.
    Transport,
    /// The document was rejected during GraphQL evaluation.
    Protocol,
    /// Evaluation succeeded but a business rule rejected the change.
    Domain,
    /// The payload did not have the expected shape.
    Decode,
}

impl fmt::Display for ErrorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Domain => "domain",
            Self::Decode => "decode",
        };
        f.write_str(name)
    }
}

/// Error type for GraphQL API operations.
///
/// Messages from multi-entry variants are joined with `"; "` in server order.
///
/// # Example
///
/// ```rust
/// use shopify_admin::admin::UserError;
/// use shopify_admin::clients::graphql::{ErrorTier, GraphqlError};
///
/// let error = GraphqlError::UserErrors(vec![
///     UserError::new(["input", "title"], "Title can't be blank"),
///     UserError::new(["input", "handle"], "Handle has already been taken"),
/// ]);
///
/// assert_eq!(error.tier(), ErrorTier::Domain);
/// assert_eq!(
///     error.to_string(),
///     "Title can't be blank; Handle has already been taken"
/// );
/// assert_eq!(error.user_errors().unwrap()[0].field, ["input", "title"]);
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The envelope carried a non-empty `errors` array.
    #[error("{}", join_protocol_messages(.0))]
    Protocol(Vec<ProtocolError>),

    /// A mutation payload carried user errors.
    #[error("{}", join_user_messages(.0))]
    UserErrors(Vec<UserError>),

    /// The response did not match the expected shape.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Request variables could not be serialized.
    #[error("Failed to encode request variables: {0}")]
    Encode(#[source] serde_json::Error),

    /// A lookup by ID returned no entity.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The resource kind, e.g. "product".
        resource: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// A mutation returned neither an entity nor user errors.
    #[error("No {field} returned in response")]
    MissingPayload {
        /// The payload field that was empty.
        field: String,
    },

    /// Both discount deactivation attempts failed.
    #[error("code discount: {code}; automatic discount: {automatic}")]
    DiscountDeactivation {
        /// Failure of the code-discount attempt.
        code: Box<GraphqlError>,
        /// Failure of the automatic-discount attempt.
        automatic: Box<GraphqlError>,
    },
}

impl GraphqlError {
    /// Returns the level at which the call failed.
    ///
    /// A failed discount deactivation reports the tier of its last attempt.
    #[must_use]
    pub fn tier(&self) -> ErrorTier {
        match self {
            Self::Http(_) => ErrorTier::Transport,
            Self::Protocol(_) => ErrorTier::Protocol,
            Self::UserErrors(_) | Self::NotFound { .. } => ErrorTier::Domain,
            Self::Decode { .. } | Self::Encode(_) | Self::MissingPayload { .. } => {
                ErrorTier::Decode
            }
            Self::DiscountDeactivation { automatic, .. } => automatic.tier(),
        }
    }

    /// Returns the user errors, field paths included, for a domain failure.
    #[must_use]
    pub fn user_errors(&self) -> Option<&[UserError]> {
        match self {
            Self::UserErrors(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the protocol errors for a protocol failure.
    #[must_use]
    pub fn protocol_errors(&self) -> Option<&[ProtocolError]> {
        match self {
            Self::Protocol(errors) => Some(errors),
            _ => None,
        }
    }
}

fn join_protocol_messages(errors: &[ProtocolError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_user_messages(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_http_variant_wraps_http_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 401,
            body: "Unauthorized".to_string(),
        });

        let graphql_error: GraphqlError = http_error.into();

        assert_eq!(graphql_error.to_string(), "HTTP 401: Unauthorized");
        assert_eq!(graphql_error.tier(), ErrorTier::Transport);
    }

    #[test]
    fn test_protocol_messages_are_joined_in_order() {
        let error = GraphqlError::Protocol(vec![
            ProtocolError::new("first"),
            ProtocolError::new("second"),
        ]);

        assert_eq!(error.to_string(), "first; second");
        assert_eq!(error.tier(), ErrorTier::Protocol);
        assert_eq!(error.protocol_errors().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_user_error_display_omits_field_paths() {
        let error = GraphqlError::UserErrors(vec![UserError::new(
            ["input", "email"],
            "Email has already been taken",
        )]);

        assert_eq!(error.to_string(), "Email has already been taken");
        assert!(!error.to_string().contains("input"));
    }

    #[test]
    fn test_discount_deactivation_contains_both_messages() {
        let error = GraphqlError::DiscountDeactivation {
            code: Box::new(GraphqlError::Protocol(vec![ProtocolError::new(
                "Invalid id",
            )])),
            automatic: Box::new(GraphqlError::UserErrors(vec![UserError::new(
                ["id"],
                "Discount does not exist",
            )])),
        };

        assert_eq!(
            error.to_string(),
            "code discount: Invalid id; automatic discount: Discount does not exist"
        );
        assert_eq!(error.tier(), ErrorTier::Domain);
    }

    #[test]
    fn test_not_found_and_missing_payload_messages() {
        let not_found = GraphqlError::NotFound {
            resource: "product",
            id: "gid://shopify/Product/1".to_string(),
        };
        assert_eq!(not_found.to_string(), "product not found: gid://shopify/Product/1");
        assert_eq!(not_found.tier(), ErrorTier::Domain);

        let missing = GraphqlError::MissingPayload {
            field: "product".to_string(),
        };
        assert_eq!(missing.tier(), ErrorTier::Decode);
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &GraphqlError::Protocol(Vec::new());
        let _ = error;
    }
}
