use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{Collection, CollectionInput};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::ListArgs;
use crate::output::{format_time, or_dash, print_key_value, truncate, Output};

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List collections
    List(ListArgs),

    /// Show a collection
    Get { id: String },

    /// Create a collection
    Create {
        title: String,
        /// Description (HTML)
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Update a collection
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Description (HTML)
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Delete a collection
    Delete { id: String },
}

pub async fn run(command: CollectionCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        CollectionCommands::List(args) => {
            let page = Collection::list(client, &args.page()).await?;
            out.page(
                &page,
                "No collections found.",
                &["ID", "TITLE", "HANDLE", "PRODUCTS", "UPDATED"],
                |c| {
                    vec![
                        short_form(&c.id).to_string(),
                        truncate(&c.title, 40),
                        c.handle.clone(),
                        c.product_count().to_string(),
                        format_time(c.updated_at.as_ref()),
                    ]
                },
            )
        }
        CollectionCommands::Get { id } => {
            let collection = Collection::get(client, &id).await?;
            show(&collection, out)
        }
        CollectionCommands::Create { title, description } => {
            let input = CollectionInput {
                id: None,
                title: Some(title),
                description_html: description,
            };
            let collection = Collection::create(client, &input).await?;
            if out.is_json() {
                return out.json(&collection);
            }
            println!("Collection created: {}", collection.title);
            println!("ID: {}", collection.id);
            Ok(())
        }
        CollectionCommands::Update {
            id,
            title,
            description,
        } => {
            let input = CollectionInput {
                id: None,
                title,
                description_html: description,
            };
            let collection = Collection::update(client, &id, &input).await?;
            if out.is_json() {
                return out.json(&collection);
            }
            println!("Collection updated: {}", collection.title);
            Ok(())
        }
        CollectionCommands::Delete { id } => {
            Collection::delete(client, &id).await?;
            println!("Collection {id} deleted.");
            Ok(())
        }
    }
}

fn show(collection: &Collection, out: Output) -> Result<()> {
    if out.is_json() {
        return out.json(collection);
    }
    print_key_value(&[
        ("ID", collection.id.clone()),
        ("Title", collection.title.clone()),
        ("Handle", collection.handle.clone()),
        ("Products", collection.product_count().to_string()),
        ("Description", or_dash(Some(&collection.description))),
        ("Updated", format_time(collection.updated_at.as_ref())),
    ])
}
