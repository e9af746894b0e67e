//! HTTP client for the accounts and balance endpoints.

use reqwest::Method;
use serde::Serialize;

use crate::{
    config::{resolve, Config, ResolvedConfig, TransportOptions},
    decode::decode,
    dispatch::dispatch,
    resource::{AccountsBalanceGet, AccountsGet, Resource},
    types::AccountsResponse,
    Error,
};

/// HTTP client for the Plaid API.
///
/// Holds a read-only default [`Config`] built once at startup. Every call may
/// pass its own partial config, which is merged over the defaults for that
/// call only. Calls share no mutable state and can run concurrently.
pub struct Client {
    defaults: Config,
}

impl Client {
    /// Creates a client with the given process-wide defaults.
    pub fn new(defaults: Config) -> Self {
        Self { defaults }
    }

    /// Creates a client whose defaults come from `PLAID_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    pub fn defaults(&self) -> &Config {
        &self.defaults
    }

    async fn call<R, P>(
        &self,
        params: &P,
        config: Option<&Config>,
        transport: Option<&TransportOptions>,
    ) -> Result<R::Output, Error>
    where
        R: Resource,
        P: Serialize + ?Sized,
    {
        let resolved = resolve(config, &self.defaults)?;
        let transport = effective_transport(&resolved, transport);
        let raw = dispatch(Method::POST, R::PATH, &resolved, params, &transport).await?;
        decode::<R>(raw)
    }

    /// Fetches the accounts linked to an Item.
    ///
    /// `params` is any object-shaped body, typically an
    /// [`AccountsGetRequest`](crate::request::AccountsGetRequest).
    pub async fn get_accounts<P>(
        &self,
        params: &P,
        config: Option<&Config>,
    ) -> Result<AccountsResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.call::<AccountsGet, P>(params, config, None).await
    }

    /// Fetches real-time balances for the accounts linked to an Item.
    pub async fn get_balances<P>(
        &self,
        params: &P,
        config: Option<&Config>,
    ) -> Result<AccountsResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.call::<AccountsBalanceGet, P>(params, config, None).await
    }

    /// Like [`get_balances`](Self::get_balances), with transport options that
    /// take precedence over the configured ones for this call. Balance requests
    /// go out to the institution and can be slow, so callers often raise the
    /// timeout here.
    pub async fn get_balances_with_transport<P>(
        &self,
        params: &P,
        config: Option<&Config>,
        transport: &TransportOptions,
    ) -> Result<AccountsResponse, Error>
    where
        P: Serialize + ?Sized,
    {
        self.call::<AccountsBalanceGet, P>(params, config, Some(transport))
            .await
    }
}

/// Transport options for one call: the caller's, field by field, over the
/// resolved configuration's.
fn effective_transport(
    resolved: &ResolvedConfig,
    over: Option<&TransportOptions>,
) -> TransportOptions {
    match over {
        Some(over) => resolved.transport().merge(over),
        None => resolved.transport().clone(),
    }
}
