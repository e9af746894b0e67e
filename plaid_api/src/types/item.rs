use serde::{Deserialize, Serialize};

use super::ApiError;

/// A linked financial institution connection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub item_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,

    /// Set when the Item is in an error state, e.g. needs re-authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_products: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billed_products: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consented_products: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_expiration_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_type: Option<String>,
}
