use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{DeactivatedAs, DiscountNode};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::ListArgs;
use crate::output::{format_time, truncate, Output};

#[derive(Subcommand)]
pub enum DiscountCommands {
    /// List code and automatic discounts
    List(ListArgs),

    /// Deactivate a discount of either kind
    Deactivate { id: String },
}

pub async fn run(command: DiscountCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        DiscountCommands::List(args) => {
            let page = DiscountNode::list(client, &args.page()).await?;
            out.page(
                &page,
                "No discounts found.",
                &["ID", "TITLE", "TYPE", "STATUS", "STARTS", "ENDS"],
                |node| {
                    let d = &node.discount;
                    vec![
                        short_form(&node.id).to_string(),
                        truncate(&d.title, 40),
                        d.kind.to_string(),
                        d.status.clone(),
                        format_time(d.starts_at.as_ref()),
                        format_time(d.ends_at.as_ref()),
                    ]
                },
            )
        }
        DiscountCommands::Deactivate { id } => {
            let kind = DiscountNode::deactivate(client, &id).await?;
            let label = match kind {
                DeactivatedAs::Code => "code",
                DeactivatedAs::Automatic => "automatic",
            };
            if out.is_json() {
                return out.json(&serde_json::json!({ "id": id, "deactivated": label }));
            }
            println!("Discount {id} deactivated.");
            Ok(())
        }
    }
}
