use anyhow::Result;
use plaid_api::types::{Account, AccountsResponse};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct AccountRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Mask")]
    #[serde(rename = "Mask")]
    mask: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Available")]
    #[serde(rename = "Available")]
    available: String,
    #[tabled(rename = "Current")]
    #[serde(rename = "Current")]
    current: String,
    #[tabled(rename = "Limit")]
    #[serde(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Owners")]
    #[serde(rename = "Owners")]
    owners: String,
}

fn build_account_rows(accounts: &[Account]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|a| AccountRow {
            name: a.name.clone(),
            mask: a.mask.clone().unwrap_or_default(),
            account_type: match &a.subtype {
                Some(subtype) => format!("{} / {}", a.account_type, subtype),
                None => a.account_type.clone(),
            },
            available: format_amount(a.balances.available.map(|d| d.to_string())),
            current: format_amount(a.balances.current.map(|d| d.to_string())),
            limit: format_amount(a.balances.limit.map(|d| d.to_string())),
            currency: a.balances.currency().unwrap_or("").to_string(),
            owners: a
                .owners()
                .iter()
                .flat_map(|o| o.names.iter().cloned())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn format_amount(amount: Option<String>) -> String {
    amount.unwrap_or_else(|| "-".to_string())
}

pub fn print_accounts(resp: &AccountsResponse, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_accounts_table(&resp.accounts),
        OutputFormat::Markdown => print_accounts_markdown(&resp.accounts),
        OutputFormat::Csv => print_accounts_csv(&resp.accounts)?,
        OutputFormat::Json => print_json(resp),
    }
    Ok(())
}

fn print_accounts_table(accounts: &[Account]) {
    println!("{}", Table::new(build_account_rows(accounts)));
}

fn print_accounts_markdown(accounts: &[Account]) {
    let mut table = Table::new(build_account_rows(accounts));
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_accounts_csv(accounts: &[Account]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_account_rows(accounts) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
