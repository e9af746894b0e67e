//! Table of API resources: which path each one lives at and which type its
//! success body decodes into.
//!
//! Adding an endpoint means adding a unit type and one `Resource` impl; the
//! dispatcher and decoder are shared.

use serde::de::DeserializeOwned;

use crate::types::AccountsResponse;

/// A logical API resource.
pub trait Resource {
    /// Name used in logs and decode errors.
    const NAME: &'static str;
    /// Endpoint path, relative to the configured base URL.
    const PATH: &'static str;
    /// Schema of a successful response body.
    type Output: DeserializeOwned;
}

/// Accounts linked to an Item, with cached balances.
pub struct AccountsGet;

impl Resource for AccountsGet {
    const NAME: &'static str = "accounts";
    const PATH: &'static str = "/accounts/get";
    type Output = AccountsResponse;
}

/// Accounts linked to an Item, with balances fetched live from the institution.
pub struct AccountsBalanceGet;

impl Resource for AccountsBalanceGet {
    const NAME: &'static str = "balance";
    const PATH: &'static str = "/accounts/balance/get";
    type Output = AccountsResponse;
}
