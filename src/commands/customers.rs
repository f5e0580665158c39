use anyhow::Result;
use clap::{Args, Subcommand};
use shopify_admin::admin::{Customer, CustomerInput};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::{split_tags, ListArgs};
use crate::output::{format_labels, format_time, or_dash, print_key_value, Output};

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List customers
    List(ListArgs),

    /// Show a customer
    Get { id: String },

    /// Create a customer
    Create(CustomerFields),

    /// Update a customer
    Update {
        id: String,
        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer
    Delete { id: String },
}

#[derive(Args)]
pub struct CustomerFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
}

impl From<CustomerFields> for CustomerInput {
    fn from(fields: CustomerFields) -> Self {
        Self {
            id: None,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            tags: fields.tags.as_deref().map(split_tags).unwrap_or_default(),
        }
    }
}

pub async fn run(command: CustomerCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        CustomerCommands::List(args) => {
            let page = Customer::list(client, &args.page()).await?;
            out.page(
                &page,
                "No customers found.",
                &["ID", "NAME", "EMAIL", "ORDERS", "SPENT", "STATE", "CREATED"],
                |c| {
                    vec![
                        short_form(&c.id).to_string(),
                        or_dash(Some(&c.full_name())),
                        or_dash(c.email.as_deref()),
                        c.number_of_orders.clone(),
                        c.amount_spent
                            .as_ref()
                            .map_or_else(|| "-".to_string(), ToString::to_string),
                        c.state.clone(),
                        format_time(c.created_at.as_ref()),
                    ]
                },
            )
        }
        CustomerCommands::Get { id } => {
            let customer = Customer::get(client, &id).await?;
            if out.is_json() {
                return out.json(&customer);
            }
            print_key_value(&[
                ("ID", customer.id.clone()),
                ("Name", or_dash(Some(&customer.full_name()))),
                ("Email", or_dash(customer.email.as_deref())),
                ("Phone", or_dash(customer.phone.as_deref())),
                ("State", customer.state.clone()),
                ("Orders", customer.number_of_orders.clone()),
                (
                    "Spent",
                    customer
                        .amount_spent
                        .as_ref()
                        .map_or_else(|| "-".to_string(), ToString::to_string),
                ),
                ("Tags", format_labels(&customer.tags)),
                (
                    "Address",
                    or_dash(customer.default_address.as_ref().map(|a| a.one_line()).as_deref()),
                ),
                ("Created", format_time(customer.created_at.as_ref())),
            ])
        }
        CustomerCommands::Create(fields) => {
            let customer = Customer::create(client, &fields.into()).await?;
            if out.is_json() {
                return out.json(&customer);
            }
            println!("Customer created: {}", customer.full_name());
            println!("ID: {}", customer.id);
            Ok(())
        }
        CustomerCommands::Update { id, fields } => {
            let customer = Customer::update(client, &id, &fields.into()).await?;
            if out.is_json() {
                return out.json(&customer);
            }
            println!("Customer updated: {}", customer.full_name());
            Ok(())
        }
        CustomerCommands::Delete { id } => {
            Customer::delete(client, &id).await?;
            println!("Customer {id} deleted.");
            Ok(())
        }
    }
}
