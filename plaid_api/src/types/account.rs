use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Item, Owner};

/// Body of `/accounts/get` and `/accounts/balance/get`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
    pub item: Item,
    pub request_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: String,

    pub balances: Balances,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,

    /// Broad account category, e.g. `depository`, `credit`, `loan`.
    #[serde(rename = "type")]
    pub account_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_account_id: Option<String>,

    /// Only present when the Item has identity data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<Owner>>,
}

impl Account {
    /// Owners of the account, or an empty slice when none were returned.
    pub fn owners(&self) -> &[Owner] {
        self.owners.as_deref().unwrap_or_default()
    }
}

/// Balance figures. Either currency code is set, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Balances {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_currency_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unofficial_currency_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_datetime: Option<DateTime<Utc>>,
}

impl Balances {
    /// The currency code in effect, preferring the ISO code.
    pub fn currency(&self) -> Option<&str> {
        self.iso_currency_code
            .as_deref()
            .or(self.unofficial_currency_code.as_deref())
    }
}
