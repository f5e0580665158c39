//! Decoders for payloads whose shape depends on `__typename`.
//!
//! Unknown type names decode to an `Unknown` variant instead of failing, so a
//! new server-side type never breaks a listing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a webhook subscription delivers its events.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shopify_admin::admin::WebhookEndpoint;
///
/// let endpoint: WebhookEndpoint = serde_json::from_value(json!({
///     "__typename": "WebhookHttpEndpoint",
///     "callbackUrl": "https://example.com/hooks"
/// }))
/// .unwrap();
///
/// assert_eq!(endpoint.address().as_deref(), Some("https://example.com/hooks"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "__typename")]
pub enum WebhookEndpoint {
    /// An HTTPS callback.
    #[serde(rename = "WebhookHttpEndpoint", rename_all = "camelCase")]
    Http {
        /// The URL events are POSTed to.
        callback_url: String,
    },
    /// An Amazon EventBridge partner source.
    #[serde(rename = "WebhookEventBridgeEndpoint")]
    EventBridge {
        /// The partner event source ARN.
        arn: String,
    },
    /// A Google Cloud Pub/Sub topic.
    #[serde(rename = "WebhookPubSubEndpoint", rename_all = "camelCase")]
    PubSub {
        /// The Google Cloud project.
        pub_sub_project: String,
        /// The Pub/Sub topic.
        pub_sub_topic: String,
    },
    /// An endpoint type this client does not know.
    #[serde(other)]
    Unknown,
}

impl WebhookEndpoint {
    /// Returns a printable destination, or `None` for unknown endpoints.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        match self {
            Self::Http { callback_url } => Some(callback_url.clone()),
            Self::EventBridge { arn } => Some(arn.clone()),
            Self::PubSub {
                pub_sub_project,
                pub_sub_topic,
            } => Some(format!("pubsub://{pub_sub_project}:{pub_sub_topic}")),
            Self::Unknown => None,
        }
    }
}

/// The concrete type of a discount, read from its `__typename`.
///
/// # Example
///
/// ```rust
/// use shopify_admin::admin::DiscountKind;
///
/// let kind: DiscountKind = serde_json::from_str(r#""DiscountAutomaticBxgy""#).unwrap();
/// assert!(kind.is_automatic());
/// assert_eq!(kind.label(), "Automatic BXGY");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// `DiscountCodeBasic`
    CodeBasic,
    /// `DiscountCodeBxgy`
    CodeBxgy,
    /// `DiscountCodeFreeShipping`
    CodeFreeShipping,
    /// `DiscountCodeApp`
    CodeApp,
    /// `DiscountAutomaticBasic`
    AutomaticBasic,
    /// `DiscountAutomaticBxgy`
    AutomaticBxgy,
    /// `DiscountAutomaticFreeShipping`
    AutomaticFreeShipping,
    /// `DiscountAutomaticApp`
    AutomaticApp,
    /// Any other type name.
    #[default]
    Unknown,
}

impl DiscountKind {
    /// Maps a `__typename` to a kind.
    #[must_use]
    pub fn from_typename(name: &str) -> Self {
        match name {
            "DiscountCodeBasic" => Self::CodeBasic,
            "DiscountCodeBxgy" => Self::CodeBxgy,
            "DiscountCodeFreeShipping" => Self::CodeFreeShipping,
            "DiscountCodeApp" => Self::CodeApp,
            "DiscountAutomaticBasic" => Self::AutomaticBasic,
            "DiscountAutomaticBxgy" => Self::AutomaticBxgy,
            "DiscountAutomaticFreeShipping" => Self::AutomaticFreeShipping,
            "DiscountAutomaticApp" => Self::AutomaticApp,
            _ => Self::Unknown,
        }
    }

    /// Returns the `__typename` for this kind.
    #[must_use]
    pub const fn typename(self) -> &'static str {
        match self {
            Self::CodeBasic => "DiscountCodeBasic",
            Self::CodeBxgy => "DiscountCodeBxgy",
            Self::CodeFreeShipping => "DiscountCodeFreeShipping",
            Self::CodeApp => "DiscountCodeApp",
            Self::AutomaticBasic => "DiscountAutomaticBasic",
            Self::AutomaticBxgy => "DiscountAutomaticBxgy",
            Self::AutomaticFreeShipping => "DiscountAutomaticFreeShipping",
            Self::AutomaticApp => "DiscountAutomaticApp",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns `true` for discounts redeemed with a code.
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(
            self,
            Self::CodeBasic | Self::CodeBxgy | Self::CodeFreeShipping | Self::CodeApp
        )
    }

    /// Returns `true` for discounts applied automatically at checkout.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(
            self,
            Self::AutomaticBasic
                | Self::AutomaticBxgy
                | Self::AutomaticFreeShipping
                | Self::AutomaticApp
        )
    }

    /// Returns a short human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeBasic => "Code Basic",
            Self::CodeBxgy => "Code BXGY",
            Self::CodeFreeShipping => "Code Free Shipping",
            Self::CodeApp => "Code App",
            Self::AutomaticBasic => "Automatic Basic",
            Self::AutomaticBxgy => "Automatic BXGY",
            Self::AutomaticFreeShipping => "Automatic Free Shipping",
            Self::AutomaticApp => "Automatic App",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DiscountKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.typename())
    }
}

impl<'de> Deserialize<'de> for DiscountKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_typename(&name))
    }
}
