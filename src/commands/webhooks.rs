use anyhow::Result;
use clap::Subcommand;
use shopify_admin::admin::{PageRequest, WebhookInput, WebhookSubscription};
use shopify_admin::gid::short_form;
use shopify_admin::GraphqlClient;

use crate::output::{format_time, or_dash, Output};

#[derive(Subcommand)]
pub enum WebhookCommands {
    /// List webhook subscriptions
    List {
        #[arg(long, default_value_t = PageRequest::DEFAULT_PAGE_SIZE)]
        first: u32,
        #[arg(long)]
        after: Option<String>,
    },

    /// Subscribe an HTTPS endpoint to a topic
    Create {
        /// Topic, e.g. ORDERS_CREATE
        #[arg(long)]
        topic: String,
        /// Callback URL
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "JSON")]
        format: String,
    },

    /// Delete a subscription
    Delete { id: String },
}

pub async fn run(command: WebhookCommands, client: &GraphqlClient, out: Output) -> Result<()> {
    match command {
        WebhookCommands::List { first, after } => {
            let page = PageRequest::new(first).after(after.unwrap_or_default());
            let subscriptions = WebhookSubscription::list(client, &page).await?;
            out.page(
                &subscriptions,
                "No webhook subscriptions found.",
                &["ID", "TOPIC", "ENDPOINT", "FORMAT", "CREATED"],
                |w| {
                    vec![
                        short_form(&w.id).to_string(),
                        w.topic.clone(),
                        or_dash(w.endpoint.as_ref().and_then(|e| e.address()).as_deref()),
                        w.format.clone(),
                        format_time(w.created_at.as_ref()),
                    ]
                },
            )
        }
        WebhookCommands::Create { topic, url, format } => {
            let input = WebhookInput {
                topic: topic.to_uppercase(),
                callback_url: url,
                format: Some(format.to_uppercase()),
            };
            let subscription = WebhookSubscription::create(client, &input).await?;
            if out.is_json() {
                return out.json(&subscription);
            }
            println!("Webhook created: {}", subscription.topic);
            println!("ID: {}", subscription.id);
            Ok(())
        }
        WebhookCommands::Delete { id } => {
            WebhookSubscription::delete(client, &id).await?;
            println!("Webhook {id} deleted.");
            Ok(())
        }
    }
}
