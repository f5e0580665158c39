use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{
    Metaobject, MetaobjectDefinition, MetaobjectFieldInput, MetaobjectInput,
};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use super::parse_key_value;
use crate::output::{
    format_time, or_dash, print_key_value, print_table, truncate, Continuation, Output,
};

#[derive(Subcommand)]
pub enum MetaobjectCommands {
    /// List metaobject definitions
    Definitions {
        #[arg(long, default_value_t = 50)]
        first: u32,
    },

    /// List metaobjects of a type
    List {
        /// Definition type, e.g. designer
        #[arg(long = "type")]
        kind: String,
        #[arg(long, default_value_t = 50)]
        first: u32,
        #[arg(long)]
        after: Option<String>,
    },

    /// Show a metaobject and its fields
    Get { id: String },

    /// Create a metaobject
    Create {
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        handle: Option<String>,
        /// Field value as key=value; repeatable
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },

    /// Update fields of a metaobject
    Update {
        id: String,
        #[arg(long)]
        handle: Option<String>,
        /// Field value as key=value; repeatable
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },

    /// Delete a metaobject
    Delete { id: String },
}

fn input(handle: Option<String>, fields: Vec<(String, String)>) -> MetaobjectInput {
    MetaobjectInput {
        handle,
        fields: fields
            .into_iter()
            .map(|(key, value)| MetaobjectFieldInput::new(key, value))
            .collect(),
    }
}

pub async fn run(command: MetaobjectCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        MetaobjectCommands::Definitions { first } => {
            let page = MetaobjectDefinition::list(client, first).await?;
            out.page_with(
                &page,
                Continuation::Silent,
                "No metaobject definitions found.",
                &["ID", "NAME", "TYPE", "DESCRIPTION"],
                |d| {
                    vec![
                        short_form(&d.id).to_string(),
                        d.name.clone(),
                        d.kind.clone(),
                        truncate(&or_dash(d.description.as_deref()), 40),
                    ]
                },
            )
        }
        MetaobjectCommands::List { kind, first, after } => {
            let mut page = shopify_admin::admin::PageRequest::new(first);
            if let Some(cursor) = after {
                page = page.after(cursor);
            }
            let objects = Metaobject::list(client, &kind, &page).await?;
            out.page(
                &objects,
                "No metaobjects found.",
                &["ID", "HANDLE", "FIELDS", "UPDATED"],
                |m| {
                    vec![
                        short_form(&m.id).to_string(),
                        m.handle.clone(),
                        m.fields.len().to_string(),
                        format_time(m.updated_at.as_ref()),
                    ]
                },
            )
        }
        MetaobjectCommands::Get { id } => {
            let metaobject = Metaobject::get(client, &id).await?;
            show(&metaobject, out)
        }
        MetaobjectCommands::Create {
            kind,
            handle,
            fields,
        } => {
            let metaobject = Metaobject::create(client, &kind, &input(handle, fields)).await?;
            if out.is_json() {
                return out.json(&metaobject);
            }
            println!("Metaobject created: {}", metaobject.handle);
            println!("ID: {}", metaobject.id);
            Ok(())
        }
        MetaobjectCommands::Update { id, handle, fields } => {
            let metaobject = Metaobject::update(client, &id, &input(handle, fields)).await?;
            if out.is_json() {
                return out.json(&metaobject);
            }
            println!("Metaobject updated: {}", metaobject.handle);
            Ok(())
        }
        MetaobjectCommands::Delete { id } => {
            Metaobject::delete(client, &id).await?;
            println!("Metaobject {id} deleted.");
            Ok(())
        }
    }
}

fn show(metaobject: &Metaobject, out: Output) -> Result<()> {
    if out.is_json() {
        return out.json(metaobject);
    }
    print_key_value(&[
        ("ID", metaobject.id.clone()),
        ("Handle", metaobject.handle.clone()),
        ("Type", metaobject.kind.clone()),
        ("Updated", format_time(metaobject.updated_at.as_ref())),
    ])?;
    if metaobject.fields.is_empty() {
        return Ok(());
    }
    println!("\nFields:");
    let rows: Vec<Vec<String>> = metaobject
        .fields
        .iter()
        .map(|f| {
            vec![
                f.key.clone(),
                or_dash(f.kind.as_deref()),
                truncate(&or_dash(f.value.as_deref()), 60),
            ]
        })
        .collect();
    print_table(&["KEY", "TYPE", "VALUE"], &rows)
}
