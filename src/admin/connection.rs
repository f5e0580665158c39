//! Cursor-based pagination shared by every list operation.
//!
//! A list call returns exactly one [`Connection`] page. Continuing is the
//! caller's job: pass [`Connection::next_cursor`] back as
//! [`PageRequest::after`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::admin::{PageRequest, Product};
//!
//! let mut page = PageRequest::new(50).query("status:active");
//! loop {
//!     let products = Product::list(&client, &page).await?;
//!     for product in products.nodes() {
//!         println!("{}", product.title);
//!     }
//!     match products.next_cursor() {
//!         Some(cursor) => page = page.after(cursor),
//!         None => break,
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A page of results: edges in server order plus page info.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// The edges, in the order the server returned them.
    pub edges: Vec<Edge<T>>,
    /// Page boundaries; all defaults when the query did not select it.
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T> Connection<T> {
    /// Returns an iterator over the nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Consumes the page and returns its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    /// Returns the number of edges on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the page has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the cursor to continue from, if there is a next page.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if !self.page_info.has_next_page {
            return None;
        }
        self.page_info
            .end_cursor
            .as_deref()
            .filter(|cursor| !cursor.is_empty())
    }
}

/// One result and its opaque cursor.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge<T> {
    /// The result.
    pub node: T,
    /// Opaque position of this edge; never parsed.
    #[serde(default)]
    pub cursor: String,
}

/// Page boundary information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether more results follow this page.
    #[serde(default)]
    pub has_next_page: bool,
    /// Whether results precede this page.
    #[serde(default)]
    pub has_previous_page: bool,
    /// Cursor of the first edge.
    #[serde(default)]
    pub start_cursor: Option<String>,
    /// Cursor of the last edge.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Page size, continuation cursor and search filter for a list call.
///
/// Serializes to the `first`, `after` and `query` variables. Empty cursors
/// and filters are never sent: the API rejects an empty `after`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shopify_admin::admin::PageRequest;
///
/// let page = PageRequest::new(25).after("").query("vendor:Acme");
/// assert_eq!(
///     serde_json::to_value(&page).unwrap(),
///     json!({ "first": 25, "query": "vendor:Acme" })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    first: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

impl PageRequest {
    /// Page size used when none is given.
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    /// Creates a request for the first `first` results.
    #[must_use]
    pub const fn new(first: u32) -> Self {
        Self {
            first,
            after: None,
            query: None,
        }
    }

    /// Continues after `cursor`. An empty cursor starts from the beginning.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = non_empty(cursor.into());
        self
    }

    /// Filters results with the server-side search syntax, passed through
    /// unmodified. An empty filter is ignored.
    #[must_use]
    pub fn query(mut self, filter: impl Into<String>) -> Self {
        self.query = non_empty(filter.into());
        self
    }

    /// Returns the page size.
    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first
    }

    /// Returns the continuation cursor, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Returns the search filter, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_request_omits_empty_cursor_and_filter() {
        let page = PageRequest::new(50).after("").query("");
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value, json!({ "first": 50 }));
        assert!(value.get("after").is_none());
        assert!(value.get("query").is_none());
    }

    #[test]
    fn test_page_request_forwards_cursor_verbatim() {
        let page = PageRequest::default().after("eyJsYXN0X2lkIjo0Mn0=");
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["first"], 50);
        assert_eq!(value["after"], "eyJsYXN0X2lkIjo0Mn0=");
    }

    #[test]
    fn test_page_request_flattens_into_scoped_variables() {
        #[derive(Serialize)]
        struct Vars<'a> {
            owner: &'a str,
            #[serde(flatten)]
            page: &'a PageRequest,
        }

        let page = PageRequest::new(10);
        let value = serde_json::to_value(Vars {
            owner: "gid://shopify/Product/1",
            page: &page,
        })
        .unwrap();

        assert_eq!(value, json!({ "owner": "gid://shopify/Product/1", "first": 10 }));
    }

    #[test]
    fn test_connection_decodes_and_preserves_order() {
        let connection: Connection<String> = serde_json::from_value(json!({
            "edges": [
                { "cursor": "c1", "node": "b" },
                { "cursor": "c2", "node": "a" }
            ],
            "pageInfo": { "hasNextPage": true, "endCursor": "c2" }
        }))
        .unwrap();

        assert_eq!(connection.nodes().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(connection.next_cursor(), Some("c2"));
        assert!(!connection.page_info.has_previous_page);
    }

    #[test]
    fn test_connection_without_next_page_has_no_cursor() {
        let connection: Connection<u32> = serde_json::from_value(json!({
            "edges": [{ "node": 1 }],
            "pageInfo": { "hasNextPage": false, "endCursor": "abc" }
        }))
        .unwrap();

        assert_eq!(connection.next_cursor(), None);
        assert_eq!(connection.edges[0].cursor, "");
    }

    #[test]
    fn test_resources_holding_connections_are_eq() {
        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<Connection<String>>();
        assert_eq_impl::<crate::admin::Order>();
        assert_eq_impl::<crate::admin::Market>();
        assert_eq_impl::<crate::admin::FulfillmentOrder>();

        let page: Connection<u32> =
            serde_json::from_value(json!({ "edges": [{ "node": 3, "cursor": "c" }] })).unwrap();
        assert_eq!(page.clone(), page);
    }

    #[test]
    fn test_connection_tolerates_missing_page_info_and_null_cursors() {
        let connection: Connection<u32> = serde_json::from_value(json!({
            "edges": [],
            "pageInfo": { "hasNextPage": false, "startCursor": null, "endCursor": null }
        }))
        .unwrap();
        assert!(connection.is_empty());

        let connection: Connection<u32> =
            serde_json::from_value(json!({ "edges": [{ "node": 7 }] })).unwrap();
        assert_eq!(connection.into_nodes(), vec![7]);
    }
}
