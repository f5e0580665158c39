//! ShopifyQL analytics queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::admin::UserError;
use crate::clients::{GraphqlClient, GraphqlError};

const SHOPIFYQL_QUERY: &str = r"
query shopifyqlQuery($query: String!) {
  shopifyqlQuery(query: $query) {
    parseErrors { code message }
    tableData {
      columnDefinitions { name dataType displayName }
      rows
    }
  }
}";

/// The tabular result of a ShopifyQL query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShopifyqlTable {
    /// Column metadata, in result order.
    #[serde(rename = "columnDefinitions")]
    pub columns: Vec<ShopifyqlColumn>,
    /// Each row is either an array of cells in column order or an object
    /// keyed by column name.
    pub rows: Vec<Value>,
}

/// A column of a [`ShopifyqlTable`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopifyqlColumn {
    /// The column key used in each row.
    pub name: String,
    /// The ShopifyQL data type, e.g. `MONEY`.
    pub data_type: String,
    /// The human-readable column title.
    pub display_name: String,
}

impl ShopifyqlColumn {
    /// Returns the display name, or the name when there is none.
    #[must_use]
    pub fn header(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl ShopifyqlTable {
    /// Renders every row as strings in column order. Missing cells are empty.
    #[must_use]
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(index, column)| {
                        let cell = match row {
                            Value::Array(cells) => cells.get(index),
                            Value::Object(cells) => cells.get(&column.name),
                            _ => None,
                        };
                        cell.map(cell_text).unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ShopifyqlResponse {
    parse_errors: Vec<ParseError>,
    table_data: Option<ShopifyqlTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParseError {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct QueryVars<'a> {
    query: &'a str,
}

/// Runs a ShopifyQL query, e.g. `FROM sales SHOW total_sales SINCE -7d`.
///
/// # Errors
///
/// Returns [`GraphqlError::UserErrors`] with one `[CODE] message` entry per
/// parse error when the query does not parse.
pub async fn run_shopifyql(
    client: &GraphqlClient,
    query: &str,
) -> Result<ShopifyqlTable, GraphqlError> {
    let response: ShopifyqlResponse = client
        .fetch(SHOPIFYQL_QUERY, &QueryVars { query }, "shopifyqlQuery")
        .await?;
    into_table(response)
}

fn into_table(response: ShopifyqlResponse) -> Result<ShopifyqlTable, GraphqlError> {
    if !response.parse_errors.is_empty() {
        let errors = response
            .parse_errors
            .into_iter()
            .map(|e| UserError::new(Vec::<String>::new(), format!("[{}] {}", e.code, e.message)))
            .collect();
        return Err(GraphqlError::UserErrors(errors));
    }
    Ok(response.table_data.unwrap_or_default())
}
