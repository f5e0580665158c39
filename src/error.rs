//! Configuration error types for the Shopify Admin CLI.
//!
//! All configuration constructors and the credential resolver return
//! `Result<T, ConfigError>` so that bad input fails before any request is
//! sent. Error messages are written to be shown to the user as-is.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building configuration or resolving credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop-name.myshopify.com' or a custom domain.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2026-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The platform has no user configuration directory.
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    /// The credentials file could not be read or written.
    #[error("Credentials file {path}: {source}")]
    CredentialsIo {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON.
    #[error("Credentials file {path} is malformed: {source}")]
    CredentialsFormat {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Neither the environment nor the credentials file provided a shop and token.
    #[error("Not authenticated. Run: shopify-admin auth setup <shop> <access-token>\nor set SHOPIFY_SHOP and SHOPIFY_ACCESS_TOKEN env vars")]
    NotAuthenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        let message = error.to_string();
        assert!(message.contains("shop"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_not_authenticated_mentions_both_sources() {
        let message = ConfigError::NotAuthenticated.to_string();
        assert!(message.contains("auth setup"));
        assert!(message.contains("SHOPIFY_ACCESS_TOKEN"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
