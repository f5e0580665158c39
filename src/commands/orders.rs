use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{Order, OrderCancelInput};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::ListArgs;
use crate::output::{format_labels, format_time, or_dash, print_key_value, print_table, Output};

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List orders
    List(ListArgs),

    /// Show an order with line items
    Get { id: String },

    /// Close an order
    Close { id: String },

    /// Cancel an order
    Cancel {
        id: String,
        /// customer, declined, fraud, inventory, staff or other
        #[arg(long, default_value = "other")]
        reason: String,
        /// Refund the payment
        #[arg(long)]
        refund: bool,
        /// Return items to inventory
        #[arg(long)]
        restock: bool,
        /// Email the customer
        #[arg(long)]
        notify: bool,
    },

    /// Mark an order as paid
    MarkPaid { id: String },
}

pub async fn run(command: OrderCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        OrderCommands::List(args) => {
            let page = Order::list(client, &args.page()).await?;
            out.page(
                &page,
                "No orders found.",
                &["ID", "NAME", "FINANCIAL", "FULFILLMENT", "TOTAL", "CUSTOMER", "CREATED"],
                |o| {
                    vec![
                        short_form(&o.id).to_string(),
                        o.name.clone(),
                        or_dash(o.financial_status.as_deref()),
                        o.display_fulfillment_status.clone(),
                        o.total_price_set.shop_money.to_string(),
                        or_dash(o.customer.as_ref().map(|c| c.full_name()).as_deref()),
                        format_time(o.created_at.as_ref()),
                    ]
                },
            )
        }
        OrderCommands::Get { id } => {
            let order = Order::get(client, &id).await?;
            if out.is_json() {
                return out.json(&order);
            }
            print_order(&order)
        }
        OrderCommands::Close { id } => {
            let order = Order::close(client, &id).await?;
            if out.is_json() {
                return out.json(&order);
            }
            println!("Order {} closed.", order.name);
            Ok(())
        }
        OrderCommands::Cancel {
            id,
            reason,
            refund,
            restock,
            notify,
        } => {
            let options = OrderCancelInput {
                reason: reason.to_uppercase(),
                refund,
                restock,
                notify_customer: notify,
            };
            Order::cancel(client, &id, &options).await?;
            println!("Order {id} cancelled.");
            Ok(())
        }
        OrderCommands::MarkPaid { id } => {
            let order = Order::mark_as_paid(client, &id).await?;
            if out.is_json() {
                return out.json(&order);
            }
            println!("Order {} marked as paid.", order.name);
            Ok(())
        }
    }
}

fn print_order(order: &Order) -> Result<()> {
    let money = |bag: Option<&shopify_admin::admin::MoneyBag>| {
        bag.map_or_else(|| "-".to_string(), |b| b.shop_money.to_string())
    };
    print_key_value(&[
        ("ID", order.id.clone()),
        ("Name", order.name.clone()),
        ("Email", or_dash(order.email.as_deref())),
        ("Financial", or_dash(order.financial_status.as_deref())),
        ("Fulfillment", order.display_fulfillment_status.clone()),
        ("Subtotal", money(order.subtotal_price_set.as_ref())),
        ("Tax", money(order.total_tax_set.as_ref())),
        ("Total", order.total_price_set.shop_money.to_string()),
        (
            "Customer",
            or_dash(order.customer.as_ref().map(|c| c.full_name()).as_deref()),
        ),
        (
            "Ship to",
            or_dash(order.shipping_address.as_ref().map(|a| a.one_line()).as_deref()),
        ),
        ("Tags", format_labels(&order.tags)),
        ("Note", or_dash(order.note.as_deref())),
        ("Created", format_time(order.created_at.as_ref())),
    ])?;

    if order.line_items.is_empty() {
        return Ok(());
    }
    println!("\nLine items:");
    let rows: Vec<Vec<String>> = order
        .line_items
        .nodes()
        .map(|item| {
            vec![
                item.title.clone(),
                or_dash(item.sku.as_deref()),
                item.quantity.to_string(),
                item.original_unit_price_set.shop_money.to_string(),
            ]
        })
        .collect();
    print_table(&["TITLE", "SKU", "QTY", "PRICE"], &rows)
}
