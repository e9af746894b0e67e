use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error object returned by the API on non-success responses, and embedded in
/// [`Item`](super::Item) when an Item is in an error state.
///
/// Known fields are typed; anything else the API adds is kept in `extra` so the
/// payload maps one-to-one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ApiError {
    /// Broad category, e.g. `INVALID_REQUEST`, `ITEM_ERROR`, `RATE_LIMIT_EXCEEDED`.
    pub error_type: String,

    /// Specific code within the category, e.g. `INVALID_ACCESS_TOKEN`.
    pub error_code: String,

    #[serde(default)]
    pub error_message: String,

    /// Message suitable for end users, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<ErrorCause>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-account detail attached to some Item errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorCause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(default)]
    pub error_type: String,

    #[serde(default)]
    pub error_code: String,

    #[serde(default)]
    pub error_message: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.error_type, self.error_code, self.error_message)
    }
}
