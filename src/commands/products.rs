use anyhow::Result;
use clap::{Args, Subcommand};
use shopify_admin::admin::{Product, ProductInput, ProductVariant, VariantInput};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::{split_tags, ListArgs};
use crate::output::{
    format_labels, format_time, or_dash, print_key_value, print_table, truncate, Output,
};

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products
    List(ListArgs),

    /// Show a product and its variants
    Get {
        /// Product ID (numeric or gid://)
        id: String,
    },

    /// Create a product
    Create {
        title: String,
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Update a product
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete { id: String },

    /// Manage product variants
    Variants {
        #[command(subcommand)]
        command: VariantCommands,
    },
}

#[derive(Args)]
pub struct ProductFields {
    #[arg(long)]
    vendor: Option<String>,

    /// Product type
    #[arg(long = "type")]
    product_type: Option<String>,

    /// ACTIVE, DRAFT or ARCHIVED
    #[arg(long)]
    status: Option<String>,

    /// Description (HTML)
    #[arg(long = "desc")]
    description: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
}

impl ProductFields {
    fn into_input(self, title: Option<String>) -> ProductInput {
        ProductInput {
            id: None,
            title,
            vendor: self.vendor,
            product_type: self.product_type,
            status: self.status,
            description_html: self.description,
            tags: self.tags.as_deref().map(split_tags).unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
pub enum VariantCommands {
    /// Show a variant
    Get { id: String },

    /// Update a variant's price, SKU or barcode
    Update {
        id: String,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        barcode: Option<String>,
    },
}

pub async fn run(command: ProductCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        ProductCommands::List(args) => {
            let page = Product::list(client, &args.page()).await?;
            out.page(
                &page,
                "No products found.",
                &["ID", "TITLE", "STATUS", "VENDOR", "TYPE", "INVENTORY", "UPDATED"],
                |p| {
                    vec![
                        short_form(&p.id).to_string(),
                        truncate(&p.title, 40),
                        p.status.clone(),
                        or_dash(Some(&p.vendor)),
                        or_dash(Some(&p.product_type)),
                        p.total_inventory.to_string(),
                        format_time(p.updated_at.as_ref()),
                    ]
                },
            )
        }
        ProductCommands::Get { id } => {
            let product = Product::get(client, &id).await?;
            if out.is_json() {
                return out.json(&product);
            }
            print_product(&product)
        }
        ProductCommands::Create { title, fields } => {
            let product = Product::create(client, &fields.into_input(Some(title))).await?;
            if out.is_json() {
                return out.json(&product);
            }
            println!("Product created: {}", product.title);
            println!("ID: {}", product.id);
            Ok(())
        }
        ProductCommands::Update { id, title, fields } => {
            let product = Product::update(client, &id, &fields.into_input(title)).await?;
            if out.is_json() {
                return out.json(&product);
            }
            println!("Product updated: {}", product.title);
            Ok(())
        }
        ProductCommands::Delete { id } => {
            Product::delete(client, &id).await?;
            println!("Product {id} deleted.");
            Ok(())
        }
        ProductCommands::Variants { command } => run_variants(command, client, out).await,
    }
}

async fn run_variants(command: VariantCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    let variant = match command {
        VariantCommands::Get { id } => ProductVariant::get(client, &id).await?,
        VariantCommands::Update {
            id,
            price,
            sku,
            barcode,
        } => {
            let input = VariantInput {
                id: None,
                price,
                sku,
                barcode,
            };
            let variant = ProductVariant::update(client, &id, &input).await?;
            if !out.is_json() {
                println!("Variant updated: {}", short_form(&variant.id));
            }
            variant
        }
    };

    if out.is_json() {
        return out.json(&variant);
    }
    print_key_value(&[
        ("ID", variant.id.clone()),
        ("Title", variant.title.clone()),
        ("Price", variant.price.clone()),
        ("Compare at", or_dash(variant.compare_at_price.as_deref())),
        ("SKU", or_dash(variant.sku.as_deref())),
        ("Barcode", or_dash(variant.barcode.as_deref())),
        (
            "Inventory",
            variant
                .inventory_quantity
                .map_or_else(|| "-".to_string(), |q| q.to_string()),
        ),
    ])
}

fn print_product(product: &Product) -> Result<()> {
    print_key_value(&[
        ("ID", product.id.clone()),
        ("Title", product.title.clone()),
        ("Handle", product.handle.clone()),
        ("Status", product.status.clone()),
        ("Vendor", or_dash(Some(&product.vendor))),
        ("Type", or_dash(Some(&product.product_type))),
        ("Tags", format_labels(&product.tags)),
        ("Inventory", product.total_inventory.to_string()),
        ("Created", format_time(product.created_at.as_ref())),
        ("Updated", format_time(product.updated_at.as_ref())),
    ])?;

    if product.variants.is_empty() {
        return Ok(());
    }
    println!("\nVariants:");
    let rows: Vec<Vec<String>> = product
        .variants
        .nodes()
        .map(|v| {
            vec![
                short_form(&v.id).to_string(),
                truncate(&v.title, 30),
                v.price.clone(),
                or_dash(v.sku.as_deref()),
                v.inventory_quantity
                    .map_or_else(|| "-".to_string(), |q| q.to_string()),
            ]
        })
        .collect();
    print_table(&["ID", "TITLE", "PRICE", "SKU", "INVENTORY"], &rows)
}
