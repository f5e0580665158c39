//! Domain-level errors returned inside mutation payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::GraphqlError;

/// A business-rule rejection reported in a mutation's `userErrors` list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserError {
    /// Path to the offending input field, e.g. `["input", "title"]`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: Vec<String>,
    /// Human readable message.
    pub message: String,
}

impl UserError {
    /// Creates a user error.
    #[must_use]
    pub fn new<I, S>(field: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

/// Fails with [`GraphqlError::UserErrors`] if `errors` is non-empty.
///
/// # Errors
///
/// Returns every error, in order, when the list is non-empty.
pub fn resolve_user_errors(errors: Vec<UserError>) -> Result<(), GraphqlError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(GraphqlError::UserErrors(errors))
    }
}

/// Resolves user errors first, then requires the mutated entity.
///
/// A payload with errors never yields its entity, even a partial one.
pub(crate) fn require_entity<T>(
    entity: Option<T>,
    errors: Vec<UserError>,
    field: &str,
) -> Result<T, GraphqlError> {
    resolve_user_errors(errors)?;
    entity.ok_or_else(|| GraphqlError::MissingPayload {
        field: field.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_list_is_success() {
        assert!(resolve_user_errors(Vec::new()).is_ok());
    }

    #[test]
    fn test_messages_are_joined_without_field_paths() {
        let error = resolve_user_errors(vec![
            UserError::new(["input", "title"], "Title can't be blank"),
            UserError::new(Vec::<String>::new(), "Something else"),
        ])
        .unwrap_err();

        assert_eq!(error.to_string(), "Title can't be blank; Something else");
        assert_eq!(error.user_errors().unwrap()[0].field, ["input", "title"]);
    }

    #[test]
    fn test_require_entity_prefers_user_errors_over_entity() {
        let result = require_entity(
            Some("partial"),
            vec![UserError::new(["id"], "Product does not exist")],
            "product",
        );

        assert_eq!(result.unwrap_err().to_string(), "Product does not exist");
    }

    #[test]
    fn test_require_entity_missing_entity() {
        let result: Result<u32, _> = require_entity(None, Vec::new(), "product");
        assert!(matches!(
            result,
            Err(GraphqlError::MissingPayload { field }) if field == "product"
        ));
    }

    #[test]
    fn test_null_field_decodes_as_empty_path() {
        let error: UserError =
            serde_json::from_value(json!({ "field": null, "message": "Invalid" })).unwrap();
        assert!(error.field.is_empty());
    }
}
