//! HTTP-level error types for the Admin API transport.
//!
//! These errors form the transport tier: the request never reached normal
//! GraphQL evaluation, either because it could not be sent, timed out, or the
//! server answered with a status of 400 or above.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::HttpError;
//!
//! match client.post_json("graphql.json", &body).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("status {}: {}", e.code, e.body),
//!     Err(HttpError::Timeout) => println!("timed out"),
//!     Err(HttpError::Network(e)) => println!("network: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server responds with status 400 or above.
///
/// The raw response body is kept verbatim, even when it contains a
/// structured GraphQL `errors` array.
///
/// # Example
///
/// ```rust
/// use shopify_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     body: "Invalid API key or access token".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: Invalid API key or access token");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Unified error type for the transport tier.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with status 400 or above.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error)
        }
    }
}

impl HttpError {
    /// Returns the HTTP status code, if the server responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Timeout | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_body() {
        let error = HttpResponseError {
            code: 500,
            body: r#"{"errors":[{"message":"boom"}]}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"HTTP 500: {"errors":[{"message":"boom"}]}"#
        );
    }

    #[test]
    fn test_http_error_status_accessor() {
        let error: HttpError = HttpResponseError {
            code: 404,
            body: "Not Found".to_string(),
        }
        .into();
        assert_eq!(error.status(), Some(404));
        assert_eq!(HttpError::Timeout.status(), None);
    }

    #[test]
    fn test_response_variant_is_transparent() {
        let error = HttpError::Response(HttpResponseError {
            code: 403,
            body: "Forbidden".to_string(),
        });
        assert_eq!(error.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpError::Timeout;
        let _ = error;

        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            body: "test".to_string(),
        };
        let _ = response_error;
    }
}
