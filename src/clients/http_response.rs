//! HTTP response type for the Admin API transport.
//!
//! This module provides the [`HttpResponse`] type returned by a successful
//! (status below 400) request.

use std::collections::HashMap;

/// A response with a status code below 400.
///
/// Header names are stored lowercase. The body is kept as raw text; the
/// GraphQL layer decides how to interpret it.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shopify_admin::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"data":{}}"#.to_string());
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc-123"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, useful when reporting problems.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), String::new()).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), String::new()).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-shopify-api-deprecated-reason", "use a newer field")]),
            String::new(),
        );

        assert_eq!(
            response.header("X-Shopify-API-Deprecated-Reason"),
            Some("use a newer field")
        );
        assert_eq!(response.deprecation_reason(), Some("use a newer field"));
        assert_eq!(response.request_id(), None);
    }
}
