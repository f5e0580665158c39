use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{InventoryAdjustment, InventoryItem, InventoryLevel, Location};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::ListArgs;
use crate::output::{format_bool, or_dash, Continuation, Output};

#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List locations
    Locations {
        #[arg(long, default_value_t = 50)]
        first: u32,
    },

    /// List stock levels at a location
    Levels {
        /// Location ID
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = 100)]
        first: u32,
    },

    /// List inventory items
    Items(ListArgs),

    /// Adjust the available quantity of an item at a location
    Adjust {
        /// Inventory item ID
        #[arg(long)]
        item: String,
        /// Location ID
        #[arg(long)]
        location: String,
        /// Signed change, e.g. 5 or -3
        #[arg(long, allow_negative_numbers = true)]
        delta: i64,
        #[arg(long, default_value = "correction")]
        reason: String,
    },
}

pub async fn run(command: InventoryCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        InventoryCommands::Locations { first } => {
            let page = Location::list(client, first).await?;
            out.page_with(
                &page,
                Continuation::Silent,
                "No locations found.",
                &["ID", "NAME", "ACTIVE", "CITY", "COUNTRY"],
                |l| {
                    vec![
                        short_form(&l.id).to_string(),
                        l.name.clone(),
                        format_bool(l.is_active),
                        or_dash(l.address.city.as_deref()),
                        or_dash(l.address.country.as_deref()),
                    ]
                },
            )
        }
        InventoryCommands::Levels { location, first } => {
            let page = InventoryLevel::list(client, &location, first).await?;
            let quantity = |level: &InventoryLevel, name: &str| {
                level
                    .quantity(name)
                    .map_or_else(|| "-".to_string(), |q| q.to_string())
            };
            out.page_with(
                &page,
                Continuation::Available,
                "No inventory levels found.",
                &["ITEM", "SKU", "AVAILABLE", "ON HAND"],
                |level| {
                    vec![
                        short_form(&level.item.id).to_string(),
                        or_dash(level.item.sku.as_deref()),
                        quantity(level, "available"),
                        quantity(level, "on_hand"),
                    ]
                },
            )
        }
        InventoryCommands::Items(args) => {
            let page = InventoryItem::list(client, &args.page()).await?;
            out.page(
                &page,
                "No inventory items found.",
                &["ID", "SKU", "TRACKED", "SHIPPING"],
                |i| {
                    vec![
                        short_form(&i.id).to_string(),
                        or_dash(i.sku.as_deref()),
                        format_bool(i.tracked),
                        format_bool(i.requires_shipping),
                    ]
                },
            )
        }
        InventoryCommands::Adjust {
            item,
            location,
            delta,
            reason,
        } => {
            let adjustment = InventoryAdjustment {
                inventory_item_id: item,
                location_id: location,
                delta,
                reason: Some(reason),
            };
            InventoryLevel::adjust(client, &adjustment).await?;
            println!(
                "Inventory adjusted: {delta:+} units for item {} at location {}",
                adjustment.inventory_item_id, adjustment.location_id
            );
            Ok(())
        }
    }
}
