use anyhow::Result;
use clap::Args;
use plaid_api::{AccountsGetRequest, Client, Config};

use crate::output::{print_accounts, OutputFormat};

#[derive(Args)]
pub struct AccountsArgs {
    /// Access token of the Item
    #[arg(long, env = "PLAID_ACCESS_TOKEN")]
    pub access_token: String,

    /// Only return this account (repeatable)
    #[arg(long = "account-id")]
    pub account_ids: Vec<String>,
}

pub async fn run(
    args: &AccountsArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let request = args
        .account_ids
        .iter()
        .fold(AccountsGetRequest::new(&args.access_token), |req, id| {
            req.with_account_id(id)
        });

    let resp = client.get_accounts(&request, Some(config)).await?;
    print_accounts(&resp, format)
}
