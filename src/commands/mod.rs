//! Subcommand groups. Each module owns a clap enum and an async `run`.

pub mod analytics;
pub mod auth;
pub mod collections;
pub mod customers;
pub mod discounts;
pub mod fulfillments;
pub mod info;
pub mod inventory;
pub mod markets;
pub mod metafields;
pub mod metaobjects;
pub mod orders;
pub mod products;
pub mod shop;
pub mod webhooks;

use clap::Args;
use shopify_admin::admin::PageRequest;

/// Paging flags shared by the cursor-paginated list commands.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Number of results to fetch
    #[arg(long, default_value_t = PageRequest::DEFAULT_PAGE_SIZE)]
    pub first: u32,

    /// Cursor printed by the previous page
    #[arg(long)]
    pub after: Option<String>,

    /// Search filter, e.g. "status:active"
    #[arg(long)]
    pub query: Option<String>,
}

impl ListArgs {
    pub fn page(&self) -> PageRequest {
        let mut page = PageRequest::new(self.first);
        if let Some(cursor) = &self.after {
            page = page.after(cursor.as_str());
        }
        if let Some(filter) = &self.query {
            page = page.query(filter.as_str());
        }
        page
    }
}

/// Splits a comma-separated tag list, dropping blanks.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a `key=value` argument. The value may contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims_and_drops_blanks() {
        assert_eq!(split_tags(" sale, new ,,summer"), vec!["sale", "new", "summer"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("title").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_list_args_page_skips_empty_values() {
        let args = ListArgs {
            first: 10,
            after: Some(String::new()),
            query: Some("vendor:Acme".to_string()),
        };
        let page = args.page();
        assert_eq!(page.first(), 10);
        assert_eq!(page.cursor(), None);
        assert_eq!(page.filter(), Some("vendor:Acme"));
    }
}
