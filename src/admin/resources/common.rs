//! Types and variable shapes shared by several resources.

use serde::{Deserialize, Serialize, Serializer};

use crate::admin::UserError;

/// A decimal amount and its currency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount as sent by the API, e.g. `"19.99"`.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

/// An amount in the shop's currency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoneyBag {
    /// The amount in the shop currency.
    pub shop_money: Money,
}

/// A postal address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MailingAddress {
    /// The recipient's first name.
    pub first_name: Option<String>,
    /// The recipient's last name.
    pub last_name: Option<String>,
    /// The first line of the street address.
    pub address1: Option<String>,
    /// The second line, e.g. an apartment number.
    pub address2: Option<String>,
    /// The city.
    pub city: Option<String>,
    /// The province or state.
    pub province: Option<String>,
    /// The postal code.
    pub zip: Option<String>,
    /// The country name.
    pub country: Option<String>,
    /// The phone number at this address.
    pub phone: Option<String>,
}

impl MailingAddress {
    /// Joins the non-empty parts into a single line.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.address1,
            &self.address2,
            &self.city,
            &self.province,
            &self.zip,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// `{ "id": ... }` variables.
#[derive(Debug, Serialize)]
pub(crate) struct IdVars<'a> {
    /// Fully qualified global ID.
    pub id: &'a str,
}

/// `{ "input": ... }` variables.
#[derive(Debug, Serialize)]
pub(crate) struct InputVars<T> {
    /// The mutation input object.
    pub input: T,
}

/// A mutation payload of which only the user errors matter.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UserErrorsPayload {
    /// Business-rule rejections; empty on success.
    pub user_errors: Vec<UserError>,
}

/// Serializes an optional enum-like string in upper case.
pub(crate) fn upper_case<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&value.to_uppercase()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailing_address_one_line_skips_blanks() {
        let address = MailingAddress {
            address1: Some("1 Main St".to_string()),
            address2: Some(String::new()),
            city: Some("Ottawa".to_string()),
            country: Some("Canada".to_string()),
            ..Default::default()
        };

        assert_eq!(address.one_line(), "1 Main St, Ottawa, Canada");
    }

    #[test]
    fn test_money_display() {
        let money = Money {
            amount: "19.99".to_string(),
            currency_code: "CAD".to_string(),
        };
        assert_eq!(money.to_string(), "19.99 CAD");
    }
}
