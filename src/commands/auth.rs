use anyhow::{bail, Result};
use clap::Subcommand;
use shopify_admin::config::credentials::{self, CredentialsFile, StoredCredentials};
use shopify_admin::{AccessToken, ConfigError, ShopDomain};

use crate::output::print_key_value;

/// Tokens shorter than this are almost certainly pasted wrong.
const MIN_TOKEN_LEN: usize = 16;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Save a shop and Admin API access token
    Setup {
        /// Shop name or domain, e.g. my-store or my-store.myshopify.com
        shop: String,
        /// Admin API access token (shpat_...)
        access_token: String,
    },

    /// Show which credentials would be used
    Status,

    /// Remove saved credentials
    Logout,
}

pub fn run(command: AuthCommands) -> Result<()> {
    let file = CredentialsFile::default_location()?;

    match command {
        AuthCommands::Setup { shop, access_token } => setup(&file, &shop, &access_token),
        AuthCommands::Status => status(&file),
        AuthCommands::Logout => {
            file.clear()?;
            println!("Credentials removed from config.");
            Ok(())
        }
    }
}

fn setup(file: &CredentialsFile, shop: &str, access_token: &str) -> Result<()> {
    let shop = ShopDomain::new(shop)?;
    let token = AccessToken::new(access_token)?;
    if token.as_ref().len() < MIN_TOKEN_LEN {
        bail!("access token looks too short");
    }

    file.save(&StoredCredentials {
        shop: shop.to_string(),
        access_token: token.as_ref().to_string(),
    })?;

    println!("Credentials saved to {}", file.path().display());
    print_key_value(&[("Shop", shop.to_string()), ("Token", token.masked())])
}

fn status(file: &CredentialsFile) -> Result<()> {
    match credentials::resolve(|name| std::env::var(name).ok(), file) {
        Ok(resolved) => print_key_value(&[
            ("Source", resolved.source.to_string()),
            ("Shop", resolved.shop.to_string()),
            ("Token", resolved.access_token.masked()),
        ]),
        Err(ConfigError::NotAuthenticated) => {
            println!("Status: not authenticated");
            println!();
            println!("Run: shopify-admin auth setup <shop> <access-token>");
            println!("or set SHOPIFY_SHOP and SHOPIFY_ACCESS_TOKEN env vars");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
