//! The GraphQL request body and response envelope.
//!
//! A response envelope is `{"data": ..., "errors": [...]}`. A non-empty
//! `errors` array wins over `data`, which may be partial or absent in that
//! case.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::clients::graphql::GraphqlError;

/// The JSON body POSTed to `graphql.json`.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The query or mutation document.
    pub query: &'a str,
    /// Operation variables, omitted when the operation has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Value>,
}

/// The outer response shape of every GraphQL call.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    /// The raw payload; `None` when the server sent `null` or nothing.
    #[serde(default)]
    pub data: Option<Value>,
    /// Protocol-level errors, in server order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ProtocolError>,
    /// Query cost and other server extensions.
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl Envelope {
    /// Parses an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decode`] if the body is not a JSON envelope.
    pub fn parse(body: &str) -> Result<Self, GraphqlError> {
        serde_json::from_str(body).map_err(|source| GraphqlError::Decode {
            context: "response envelope".to_string(),
            source,
        })
    }

    /// Returns the payload, or the protocol errors if any were reported.
    ///
    /// An absent payload is returned as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Protocol`] if `errors` is non-empty.
    pub fn into_data(self) -> Result<Value, GraphqlError> {
        if !self.errors.is_empty() {
            return Err(GraphqlError::Protocol(self.errors));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

/// A single entry of the envelope's `errors` array.
///
/// Only `message` is used for control flow; the rest is kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProtocolError {
    /// Human readable message.
    pub message: String,
    /// Positions in the document the error refers to.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<SourceLocation>,
    /// Response path of the failing field; segments are names or indexes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: Vec<Value>,
    /// Server extensions, e.g. an error `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl ProtocolError {
    /// Creates an error carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }
}

/// A line/column position in a GraphQL document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_missing_variables() {
        let body = serde_json::to_value(GraphqlRequest {
            query: "{ shop { name } }",
            variables: None,
        })
        .unwrap();

        assert_eq!(body, json!({ "query": "{ shop { name } }" }));
    }

    #[test]
    fn test_request_includes_variables() {
        let variables = json!({ "first": 10 });
        let body = serde_json::to_value(GraphqlRequest {
            query: "query($first: Int!) { products(first: $first) { edges { cursor } } }",
            variables: Some(&variables),
        })
        .unwrap();

        assert_eq!(body["variables"], json!({ "first": 10 }));
    }

    #[test]
    fn test_envelope_with_data_returns_payload() {
        let envelope = Envelope::parse(r#"{"data":{"shop":{"name":"Demo"}}}"#).unwrap();
        let data = envelope.into_data().unwrap();
        assert_eq!(data["shop"]["name"], "Demo");
    }

    #[test]
    fn test_envelope_errors_win_over_partial_data() {
        let envelope = Envelope::parse(
            r#"{
                "data": {"product": null},
                "errors": [
                    {"message": "Access denied", "locations": [{"line": 1, "column": 3}], "path": ["product"]},
                    {"message": "Throttled", "extensions": {"code": "THROTTLED"}}
                ]
            }"#,
        )
        .unwrap();

        let error = envelope.into_data().unwrap_err();
        assert_eq!(error.to_string(), "Access denied; Throttled");
        match error {
            GraphqlError::Protocol(errors) => {
                assert_eq!(errors[0].locations[0], SourceLocation { line: 1, column: 3 });
                assert_eq!(errors[0].path, vec![json!("product")]);
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_tolerates_null_errors_and_missing_data() {
        let envelope = Envelope::parse(r#"{"errors": null}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap(), Value::Null);
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let error = Envelope::parse("<html>gateway</html>").unwrap_err();
        assert!(matches!(error, GraphqlError::Decode { .. }));
    }
}
