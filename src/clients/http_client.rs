//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type, which sends authenticated
//! JSON POST requests. It performs exactly one attempt per call: there is no
//! retry on network errors, 5xx or rate-limit responses.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::AdminConfig;

/// Crate version from Cargo.toml.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Base URI construction from the shop domain or `api_host`
/// - Default headers including User-Agent and access token
/// - The per-request timeout
/// - Deprecation header logging
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2026-01").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2026-01")
    /// * `config` - The resolved connection configuration
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_admin::{AccessToken, AdminConfig, ShopDomain};
    /// use shopify_admin::clients::HttpClient;
    ///
    /// let config = AdminConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("shpat_0123456789abcdef").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new("/admin/api/2026-01", &config).unwrap();
    /// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
    /// ```
    pub fn new(base_path: impl Into<String>, config: &AdminConfig) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let shop = config.shop().as_ref();

        // Determine base URI - use api_host if configured, otherwise the shop
        let base_uri = config.api_host().map_or_else(
            || format!("https://{shop}"),
            |host| host.base_uri().to_string(),
        );

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify Admin CLI v{CLI_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Add Host header when using api_host (proxy scenario)
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(HttpError::Network)?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `body` as JSON to `path` under the base path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request times out (`Timeout`)
    /// - A network error occurs (`Network`)
    /// - The status is 400 or above (`Response`), with the raw body kept
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}/{}", self.base_uri, self.base_path, path);

        let mut req_builder = self.client.post(&url).json(body);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!("POST {}", url);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body_text);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                path,
                reason
            );
        }

        if code >= 400 {
            tracing::debug!(
                "Request failed with status {} (request id: {})",
                code,
                response.request_id().unwrap_or("none")
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                body: response.body,
            }));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
