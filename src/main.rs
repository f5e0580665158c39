mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopify_admin::config::credentials::{self, CredentialsFile};
use shopify_admin::{AdminConfig, ApiVersion, GraphqlClient};

use crate::output::Output;

#[derive(Parser)]
#[command(name = "shopify-admin")]
#[command(about = "Manage a Shopify store through the Admin GraphQL API", long_about = None)]
#[command(version)]
#[command(after_help = "Credentials are read from SHOPIFY_SHOP and SHOPIFY_ACCESS_TOKEN \
    (or their aliases), then from the file written by `shopify-admin auth setup`.")]
struct Cli {
    /// Force JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Force pretty-printed JSON output (implies --json)
    #[arg(long, global = true)]
    pretty: bool,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Admin API version, e.g. 2026-01
    #[arg(long, global = true, value_name = "VERSION")]
    api_version: Option<ApiVersion>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage saved credentials
    Auth {
        #[command(subcommand)]
        command: commands::auth::AuthCommands,
    },

    /// Show config path, platform and credential environment
    Info,

    #[command(flatten)]
    Store(StoreCommands),
}

/// Command groups that talk to the store.
#[derive(Subcommand)]
enum StoreCommands {
    /// Store information
    Shop {
        #[command(subcommand)]
        command: commands::shop::ShopCommands,
    },

    /// Manage products and variants
    Products {
        #[command(subcommand)]
        command: commands::products::ProductCommands,
    },

    /// Manage collections
    Collections {
        #[command(subcommand)]
        command: commands::collections::CollectionCommands,
    },

    /// Manage orders
    Orders {
        #[command(subcommand)]
        command: commands::orders::OrderCommands,
    },

    /// Manage customers
    Customers {
        #[command(subcommand)]
        command: commands::customers::CustomerCommands,
    },

    /// Locations, inventory items and stock levels
    Inventory {
        #[command(subcommand)]
        command: commands::inventory::InventoryCommands,
    },

    /// Manage metafields
    Metafields {
        #[command(subcommand)]
        command: commands::metafields::MetafieldCommands,
    },

    /// Manage metaobjects
    Metaobjects {
        #[command(subcommand)]
        command: commands::metaobjects::MetaobjectCommands,
    },

    /// Manage webhook subscriptions
    Webhooks {
        #[command(subcommand)]
        command: commands::webhooks::WebhookCommands,
    },

    /// List and deactivate discounts
    Discounts {
        #[command(subcommand)]
        command: commands::discounts::DiscountCommands,
    },

    /// Fulfillment orders and fulfillments
    Fulfillments {
        #[command(subcommand)]
        command: commands::fulfillments::FulfillmentCommands,
    },

    /// Markets
    Markets {
        #[command(subcommand)]
        command: commands::markets::MarketCommands,
    },

    /// ShopifyQL analytics
    Analytics {
        #[command(subcommand)]
        command: commands::analytics::AnalyticsCommands,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let out = Output::new(cli.json, cli.pretty);

    match cli.command {
        Commands::Auth { command } => commands::auth::run(command),
        Commands::Info => commands::info::run(),
        Commands::Store(command) => {
            let client = connect(cli.api_version)?;
            run_with_client(command, &client, out).await
        }
    }
}

async fn run_with_client(
    command: StoreCommands,
    client: &GraphqlClient,
    out: Output,
) -> Result<()> {
    match command {
        StoreCommands::Shop { command } => commands::shop::run(command, client, out).await,
        StoreCommands::Products { command } => commands::products::run(command, client, out).await,
        StoreCommands::Collections { command } => {
            commands::collections::run(command, client, out).await
        }
        StoreCommands::Orders { command } => commands::orders::run(command, client, out).await,
        StoreCommands::Customers { command } => {
            commands::customers::run(command, client, out).await
        }
        StoreCommands::Inventory { command } => {
            commands::inventory::run(command, client, out).await
        }
        StoreCommands::Metafields { command } => {
            commands::metafields::run(command, client, out).await
        }
        StoreCommands::Metaobjects { command } => {
            commands::metaobjects::run(command, client, out).await
        }
        StoreCommands::Webhooks { command } => commands::webhooks::run(command, client, out).await,
        StoreCommands::Discounts { command } => {
            commands::discounts::run(command, client, out).await
        }
        StoreCommands::Fulfillments { command } => {
            commands::fulfillments::run(command, client, out).await
        }
        StoreCommands::Markets { command } => commands::markets::run(command, client, out).await,
        StoreCommands::Analytics { command } => {
            commands::analytics::run(command, client, out).await
        }
    }
}

/// Resolves credentials and builds the one client used by the command.
fn connect(api_version: Option<ApiVersion>) -> Result<GraphqlClient> {
    let file = CredentialsFile::default_location()?;
    let resolved = credentials::resolve(|name| std::env::var(name).ok(), &file)?;
    tracing::debug!(shop = %resolved.shop, source = %resolved.source, "Resolved credentials");

    let mut builder = AdminConfig::builder()
        .shop(resolved.shop)
        .access_token(resolved.access_token);
    if let Some(version) = api_version {
        builder = builder.api_version(version);
    }

    Ok(GraphqlClient::new(&builder.build()?)?)
}

/// Initialize tracing to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "shopify_admin=debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
