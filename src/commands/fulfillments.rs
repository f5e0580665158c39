use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{Fulfillment, FulfillmentInput, FulfillmentOrder};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use crate::output::{format_labels, format_time, or_dash, print_key_value, Continuation, Output};

#[derive(Subcommand)]
pub enum FulfillmentCommands {
    /// List the fulfillment orders of an order
    List {
        /// Order ID
        order_id: String,
    },

    /// Fulfill a fulfillment order, optionally with tracking
    Create {
        /// Fulfillment order ID
        fulfillment_order_id: String,
        /// Tracking company, e.g. UPS
        #[arg(long = "tracking")]
        company: Option<String>,
        /// Tracking number
        #[arg(long)]
        number: Option<String>,
        /// Tracking URL
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run(command: FulfillmentCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        FulfillmentCommands::List { order_id } => {
            let page = FulfillmentOrder::list(client, &order_id).await?;
            out.page_with(
                &page,
                Continuation::Silent,
                "No fulfillment orders found.",
                &["ID", "STATUS", "REQUEST", "LOCATION", "ITEMS", "FULFILL AT"],
                |fo| {
                    let remaining: i64 = fo.line_items.nodes().map(|i| i.remaining_quantity).sum();
                    vec![
                        short_form(&fo.id).to_string(),
                        fo.status.clone(),
                        fo.request_status.clone(),
                        or_dash(Some(&fo.assigned_location.name)),
                        remaining.to_string(),
                        format_time(fo.fulfill_at.as_ref()),
                    ]
                },
            )
        }
        FulfillmentCommands::Create {
            fulfillment_order_id,
            company,
            number,
            url,
        } => {
            let input = FulfillmentInput {
                fulfillment_order_id,
                tracking_company: company,
                tracking_number: number,
                tracking_url: url,
            };
            let fulfillment = Fulfillment::create(client, &input).await?;
            if out.is_json() {
                return out.json(&fulfillment);
            }
            println!("Fulfillment created.");
            let numbers: Vec<String> = fulfillment
                .tracking_numbers()
                .into_iter()
                .map(str::to_string)
                .collect();
            print_key_value(&[
                ("ID", fulfillment.id.clone()),
                ("Status", fulfillment.status.clone()),
                ("Carrier", or_dash(fulfillment.tracking_company())),
                ("Tracking", format_labels(&numbers)),
                ("Created", format_time(fulfillment.created_at.as_ref())),
            ])
        }
    }
}
