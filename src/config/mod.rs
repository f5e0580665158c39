//! Configuration types for the Shopify Admin CLI.
//!
//! This module provides the connection configuration every request is sent
//! with, plus the credential resolution that produces it.
//!
//! # Overview
//!
//! - [`AdminConfig`]: shop domain, access token, timeout and API version
//! - [`AdminConfigBuilder`]: a builder for constructing [`AdminConfig`] instances
//! - [`ShopDomain`], [`AccessToken`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version to use
//! - [`credentials`]: environment and config-file credential resolution
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_admin::{AccessToken, AdminConfig, ShopDomain};
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_0123456789abcdef").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

pub mod credentials;
mod newtypes;
mod version;

pub use newtypes::{mask, AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration for the Admin API.
///
/// A single `AdminConfig` is built per process invocation, once credentials
/// are resolved, and is immutable afterwards.
///
/// # Thread Safety
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    timeout: Duration,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host that requests are routed through, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// Required fields are `shop` and `access_token`.
///
/// # Defaults
///
/// - `timeout`: [`DEFAULT_TIMEOUT`] (30 seconds)
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    timeout: Option<Duration>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through `host` instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(AdminConfig {
            shop,
            access_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
