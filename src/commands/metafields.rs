use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{Metafield, MetafieldSetInput};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use crate::output::{format_time, print_key_value, truncate, Continuation, Output};

#[derive(Subcommand)]
pub enum MetafieldCommands {
    /// List the metafields of a resource
    List {
        /// Owner global ID, e.g. gid://shopify/Product/123
        #[arg(long)]
        owner: String,
        #[arg(long, default_value_t = 100)]
        first: u32,
    },

    /// Show a metafield
    Get { id: String },

    /// Create or overwrite a metafield
    Set {
        /// Owner global ID, e.g. gid://shopify/Product/123
        #[arg(long)]
        owner: String,
        #[arg(long)]
        namespace: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
        /// Metafield type, e.g. single_line_text_field
        #[arg(long = "type", default_value = "single_line_text_field")]
        kind: String,
    },

    /// Delete a metafield
    Delete { id: String },
}

pub async fn run(command: MetafieldCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        MetafieldCommands::List { owner, first } => {
            let page = Metafield::list(client, &owner, first).await?;
            out.page_with(
                &page,
                Continuation::Silent,
                "No metafields found.",
                &["ID", "NAMESPACE", "KEY", "TYPE", "VALUE"],
                |m| {
                    vec![
                        short_form(&m.id).to_string(),
                        m.namespace.clone(),
                        m.key.clone(),
                        m.kind.clone(),
                        truncate(&m.value, 50),
                    ]
                },
            )
        }
        MetafieldCommands::Get { id } => {
            let metafield = Metafield::get(client, &id).await?;
            if out.is_json() {
                return out.json(&metafield);
            }
            print_key_value(&[
                ("ID", metafield.id.clone()),
                ("Namespace", metafield.namespace.clone()),
                ("Key", metafield.key.clone()),
                ("Type", metafield.kind.clone()),
                ("Value", metafield.value.clone()),
                ("Updated", format_time(metafield.updated_at.as_ref())),
            ])
        }
        MetafieldCommands::Set {
            owner,
            namespace,
            key,
            value,
            kind,
        } => {
            let input = MetafieldSetInput {
                owner_id: owner,
                namespace,
                key,
                value,
                kind,
            };
            let metafield = Metafield::set(client, &input).await?;
            if out.is_json() {
                return out.json(&metafield);
            }
            println!("Metafield set: {}.{}", metafield.namespace, metafield.key);
            println!("ID: {}", metafield.id);
            Ok(())
        }
        MetafieldCommands::Delete { id } => {
            Metafield::delete(client, &id).await?;
            println!("Metafield {id} deleted.");
            Ok(())
        }
    }
}
