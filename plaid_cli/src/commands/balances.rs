use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use plaid_api::{AccountsBalanceGetRequest, Client, Config, TlsVersion, TransportOptions};

use crate::output::{print_accounts, OutputFormat};

#[derive(Args)]
pub struct BalancesArgs {
    /// Access token of the Item
    #[arg(long, env = "PLAID_ACCESS_TOKEN")]
    pub access_token: String,

    /// Only return this account (repeatable)
    #[arg(long = "account-id")]
    pub account_ids: Vec<String>,

    /// Oldest acceptable balance, RFC 3339 (e.g. 2024-03-01T00:00:00Z)
    #[arg(long)]
    pub min_last_updated: Option<DateTime<Utc>>,

    /// Total request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Timeout between response reads in seconds
    #[arg(long)]
    pub recv_timeout_secs: Option<u64>,

    /// Minimum TLS version: 1.2 or 1.3
    #[arg(long)]
    pub min_tls: Option<String>,
}

impl BalancesArgs {
    /// Transport options from flags, or `None` when no flag was given.
    fn transport(&self) -> Result<Option<TransportOptions>> {
        if self.timeout_secs.is_none() && self.recv_timeout_secs.is_none() && self.min_tls.is_none()
        {
            return Ok(None);
        }
        let mut transport = TransportOptions::default();
        if let Some(secs) = self.timeout_secs {
            transport = transport.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.recv_timeout_secs {
            transport = transport.with_read_timeout(Duration::from_secs(secs));
        }
        if let Some(version) = &self.min_tls {
            transport = transport.with_min_tls_version(version.parse::<TlsVersion>()?);
        }
        Ok(Some(transport))
    }
}

pub async fn run(
    args: &BalancesArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let mut request = AccountsBalanceGetRequest::new(&args.access_token);
    for id in &args.account_ids {
        request = request.with_account_id(id);
    }
    if let Some(at) = args.min_last_updated {
        request = request.with_min_last_updated(at);
    }

    let resp = match args.transport()? {
        Some(transport) => {
            client
                .get_balances_with_transport(&request, Some(config), &transport)
                .await?
        }
        None => client.get_balances(&request, Some(config)).await?,
    };
    print_accounts(&resp, format)
}
