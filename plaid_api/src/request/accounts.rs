//! Request bodies for the accounts and balance endpoints.
//!
//! Credentials are not part of these shapes; the dispatcher adds them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Parameters for `/accounts/get`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountsGetRequest {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AccountsGetOptions>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AccountsGetOptions {
    /// Restrict the response to these accounts. Empty means all accounts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_ids: Vec<String>,
}

impl AccountsGetRequest {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            options: None,
        }
    }

    /// Adds an account ID to the filter. Can be called repeatedly.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.options
            .get_or_insert_with(AccountsGetOptions::default)
            .account_ids
            .push(account_id.into());
        self
    }
}

/// Parameters for `/accounts/balance/get`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountsBalanceGetRequest {
    pub access_token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AccountsBalanceGetOptions>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AccountsBalanceGetOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_ids: Vec<String>,

    /// Oldest acceptable balance. Only honored by some institutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_last_updated_datetime: Option<DateTime<Utc>>,
}

impl AccountsBalanceGetRequest {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            options: None,
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.options_mut().account_ids.push(account_id.into());
        self
    }

    pub fn with_min_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.options_mut().min_last_updated_datetime = Some(at);
        self
    }

    fn options_mut(&mut self) -> &mut AccountsBalanceGetOptions {
        self.options
            .get_or_insert_with(AccountsBalanceGetOptions::default)
    }
}
