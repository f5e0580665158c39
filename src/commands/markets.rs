use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::Market;
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use crate::output::{format_bool, print_key_value, truncate, Continuation, Output};

#[derive(Subcommand)]
pub enum MarketCommands {
    /// List markets
    List {
        #[arg(long, default_value_t = 50)]
        first: u32,
    },

    /// Show a market and its regions
    Get { id: String },
}

pub async fn run(command: MarketCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        MarketCommands::List { first } => {
            let page = Market::list(client, first).await?;
            out.page_with(
                &page,
                Continuation::Silent,
                "No markets found.",
                &["ID", "NAME", "HANDLE", "ENABLED", "PRIMARY", "REGIONS"],
                |m| {
                    vec![
                        short_form(&m.id).to_string(),
                        m.name.clone(),
                        m.handle.clone(),
                        format_bool(m.enabled),
                        format_bool(m.primary),
                        truncate(&m.region_names(), 40),
                    ]
                },
            )
        }
        MarketCommands::Get { id } => {
            let market = Market::get(client, &id).await?;
            if out.is_json() {
                return out.json(&market);
            }
            print_key_value(&[
                ("ID", market.id.clone()),
                ("Name", market.name.clone()),
                ("Handle", market.handle.clone()),
                ("Enabled", format_bool(market.enabled)),
                ("Primary", format_bool(market.primary)),
                ("Regions", market.region_names()),
            ])
        }
    }
}
