use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::run_shopifyql;
use shopify_admin::GraphqlClient;

use crate::output::{print_table, Output};

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Run a ShopifyQL query
    Query {
        /// e.g. "FROM sales SHOW total_sales SINCE -7d"
        shopifyql: String,
    },
}

pub async fn run(command: AnalyticsCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        AnalyticsCommands::Query { shopifyql } => {
            let table = run_shopifyql(client, &shopifyql).await?;
            if out.is_json() {
                return out.json(&table);
            }
            if table.rows.is_empty() {
                println!("No data returned.");
                return Ok(());
            }
            let headers: Vec<&str> = table.columns.iter().map(|c| c.header()).collect();
            print_table(&headers, &table.string_rows())?;
            println!("\n({} rows)", table.rows.len());
            Ok(())
        }
    }
}
