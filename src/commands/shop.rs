use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::Shop;
use shopify_admin::GraphqlClient;

use crate::output::{format_bool, format_time, print_key_value, Output};

#[derive(Subcommand)]
pub enum ShopCommands {
    /// Show store details and plan
    Info,
}

pub async fn run(command: ShopCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        ShopCommands::Info => {
            let shop = Shop::get(client).await?;
            if out.is_json() {
                return out.json(&shop);
            }
            print_key_value(&[
                ("Name", shop.name),
                ("Email", shop.email),
                ("Domain", shop.myshopify_domain),
                ("Primary", shop.primary_domain.url),
                ("Plan", shop.plan.display_name),
                ("Plus", format_bool(shop.plan.shopify_plus)),
                ("Currency", shop.currency_code),
                ("Country", shop.country_code),
                ("Timezone", shop.timezone_abbreviation),
                ("Created", format_time(shop.created_at.as_ref())),
            ])
        }
    }
}
