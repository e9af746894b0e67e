mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plaid_api::{Client, Config, Environment};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "plaid")]
#[command(about = "Fetch accounts and balances for a linked Item")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Client ID (overrides PLAID_CLIENT_ID)
    #[arg(long, global = true)]
    client_id: Option<String>,

    /// Secret (overrides PLAID_SECRET)
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Environment: sandbox, development, production (overrides PLAID_ENV)
    #[arg(long, global = true)]
    env: Option<String>,

    /// Explicit API base URL, e.g. for a local mock (overrides --env)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List accounts linked to an Item
    Accounts(commands::accounts::AccountsArgs),
    /// Fetch real-time balances
    Balances(commands::balances::BalancesArgs),
}

impl Cli {
    /// Per-call configuration built from the global flags.
    fn config_override(&self) -> Result<Config> {
        let mut config = Config::default();
        if let Some(client_id) = &self.client_id {
            config = config.with_client_id(client_id);
        }
        if let Some(secret) = &self.secret {
            config = config.with_secret(secret);
        }
        if let Some(env) = &self.env {
            config = config.with_environment(env.parse::<Environment>()?);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plaid=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::from_env()?;
    let config = cli.config_override()?;

    match &cli.command {
        Commands::Accounts(args) => commands::accounts::run(args, &client, &config, &format).await?,
        Commands::Balances(args) => commands::balances::run(args, &client, &config, &format).await?,
    }

    Ok(())
}
