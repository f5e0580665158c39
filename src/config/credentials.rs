//! Credential resolution for the Admin API.
//!
//! Credentials are looked up in two places, in order:
//!
//! 1. Environment variables: a shop from [`SHOP_ENV_VARS`] and a token from
//!    [`TOKEN_ENV_VARS`]. Both must be present for the environment to win.
//! 2. The credentials file at `<user config dir>/shopify-admin/config.json`,
//!    written by `shopify-admin auth setup`.
//!
//! The environment lookup is injected so that resolution can be tested
//! without touching process state.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopify_admin::config::credentials::{self, CredentialsFile};
//!
//! let file = CredentialsFile::default_location()?;
//! let resolved = credentials::resolve(|name| std::env::var(name).ok(), &file)?;
//! println!("using {} from {}", resolved.shop, resolved.source);
//! # Ok::<(), shopify_admin::ConfigError>(())
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{mask, AccessToken, ShopDomain};
use crate::error::ConfigError;

/// Environment variables consulted for the access token, in priority order.
pub const TOKEN_ENV_VARS: &[&str] = &[
    "SHOPIFY_ACCESS_TOKEN",
    "SHOPIFY_TOKEN",
    "SHOPIFY_API_TOKEN",
    "SHOPIFY_API_KEY",
    "SHOPIFY_KEY",
    "SHOPIFY_API",
    "API_KEY_SHOPIFY",
    "API_SHOPIFY",
    "SHOPIFY_SECRET_KEY",
    "SHOPIFY_API_SECRET",
    "SHOPIFY_SECRET",
    "SHOPIFY_SK",
    "SK_SHOPIFY",
];

/// Environment variables consulted for the shop domain, in priority order.
pub const SHOP_ENV_VARS: &[&str] = &[
    "SHOPIFY_SHOP",
    "SHOPIFY_STORE",
    "SHOPIFY_DOMAIN",
    "SHOPIFY_SHOP_URL",
    "SHOPIFY_STORE_URL",
    "SHOP_DOMAIN",
];

const APP_DIR: &str = "shopify-admin";
const FILE_NAME: &str = "config.json";

/// The persisted contents of the credentials file.
///
/// Fields are plain strings so that a partially written file still loads;
/// validation happens during [`resolve`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// The shop domain.
    #[serde(default)]
    pub shop: String,
    /// The Admin API access token.
    #[serde(default)]
    pub access_token: String,
}

impl StoredCredentials {
    /// Returns `true` when both the shop and the token are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.shop.is_empty() && !self.access_token.is_empty()
    }
}

impl fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("shop", &self.shop)
            .field("access_token", &mask(&self.access_token))
            .finish()
    }
}

/// Where a resolved set of credentials came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// Environment variables.
    Environment,
    /// The credentials file.
    ConfigFile,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("env vars"),
            Self::ConfigFile => f.write_str("config file"),
        }
    }
}

/// Validated credentials ready to build an [`AdminConfig`](super::AdminConfig).
#[derive(Clone, Debug)]
pub struct ResolvedCredentials {
    /// The shop domain.
    pub shop: ShopDomain,
    /// The access token.
    pub access_token: AccessToken,
    /// Where the credentials were found.
    pub source: CredentialSource,
}

/// The on-disk credentials file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    /// Returns the file in the platform's user configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has none.
    pub fn default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(dir.join(APP_DIR).join(FILE_NAME)))
    }

    /// Uses the file at `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. A missing file yields empty credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsIo`] if the file exists but cannot be
    /// read, or [`ConfigError::CredentialsFormat`] if it is not valid JSON.
    pub fn load(&self) -> Result<StoredCredentials, ConfigError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredCredentials::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&data).map_err(|source| ConfigError::CredentialsFormat {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the file, creating its directory. On Unix the file is only
    /// readable by its owner.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsIo`] if the directory or file cannot
    /// be written.
    pub fn save(&self, credentials: &StoredCredentials) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            create_private_dir(dir).map_err(|source| self.io_error(source))?;
        }

        let data = serde_json::to_string_pretty(credentials).map_err(|source| {
            ConfigError::CredentialsFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut file = open_private_file(&self.path).map_err(|source| self.io_error(source))?;
        file.write_all(data.as_bytes())
            .map_err(|source| self.io_error(source))
    }

    /// Removes the file. Removing a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsIo`] if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), ConfigError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::CredentialsIo {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn open_private_file(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private_file(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Returns the value of the first variable in `names` that is set and non-empty.
pub fn first_env_value<F>(names: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Resolves credentials, preferring the environment over the credentials file.
///
/// # Errors
///
/// Returns [`ConfigError::NotAuthenticated`] when neither source has both a
/// shop and a token, a file error if the file cannot be loaded, or a
/// validation error if the winning shop or token is malformed.
pub fn resolve<F>(lookup: F, file: &CredentialsFile) -> Result<ResolvedCredentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_shop = first_env_value(SHOP_ENV_VARS, &lookup);
    let env_token = first_env_value(TOKEN_ENV_VARS, &lookup);

    if let (Some(shop), Some(token)) = (env_shop, env_token) {
        tracing::debug!("Using credentials from environment variables");
        return Ok(ResolvedCredentials {
            shop: ShopDomain::new(shop)?,
            access_token: AccessToken::new(token)?,
            source: CredentialSource::Environment,
        });
    }

    let stored = file.load()?;
    if !stored.is_complete() {
        return Err(ConfigError::NotAuthenticated);
    }

    tracing::debug!("Using credentials from {}", file.path().display());
    Ok(ResolvedCredentials {
        shop: ShopDomain::new(stored.shop)?,
        access_token: AccessToken::new(stored.access_token)?,
        source: CredentialSource::ConfigFile,
    })
}
