mod commands;
mod output;

use anyhow::{Context, Result};
use bridge_api::Client;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "bridge_api=info,bridge_cli=info";

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Query users, banks, items, accounts and transactions on the Bridge API")]
struct Cli {
    /// API root, e.g. a sandbox URL. Defaults to production.
    #[arg(long, env = "BRIDGE_BASE_URL")]
    base_url: Option<String>,

    /// Application client ID
    #[arg(long, env = "BRIDGE_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    /// Application client secret
    #[arg(long, env = "BRIDGE_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Value of the Bankin-Version header
    #[arg(long, env = "BRIDGE_API_VERSION")]
    api_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, authenticate and manage users
    Users(commands::users::UsersArgs),
    /// List or lookup supported banks
    Banks(commands::banks::BanksArgs),
    /// Connect, refresh and inspect bank connections
    Items(commands::items::ItemsArgs),
    /// List or lookup accounts
    Accounts(commands::accounts::AccountsArgs),
    /// List or lookup transactions
    Transactions(commands::transactions::TransactionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine: flags and the environment still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match &cli.base_url {
        Some(url) => Client::with_base_url(url, &cli.client_id, &cli.client_secret),
        None => Client::new(&cli.client_id, &cli.client_secret),
    }
    .context("failed to build API client")?;
    if let Some(version) = &cli.api_version {
        client = client.with_api_version(version);
    }
    tracing::debug!(?client, "Client ready");

    match &cli.command {
        Commands::Users(args) => commands::users::run(args, &client).await?,
        Commands::Banks(args) => commands::banks::run(args, &client).await?,
        Commands::Items(args) => commands::items::run(args, &client).await?,
        Commands::Accounts(args) => commands::accounts::run(args, &client).await?,
        Commands::Transactions(args) => commands::transactions::run(args, &client).await?,
    }

    Ok(())
}

/// `RUST_LOG` wins over the default filter when it parses.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_filter_defaults_to_crate_info() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("bridge_api=info"));
        assert!(filter.contains("bridge_cli=info"));

        let blank = log_filter(Some("  ".to_string())).to_string();
        assert!(blank.contains("bridge_api=info"));
    }

    #[test]
    fn log_filter_prefers_environment() {
        let filter = log_filter(Some("bridge_api=debug".to_string())).to_string();
        assert!(filter.contains("bridge_api=debug"));
        assert!(!filter.contains("bridge_api=info"));
    }

    #[test]
    fn parses_credentials_and_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "bridge",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "banks",
            "get",
            "--id",
            "408",
        ])
        .unwrap();
        assert_eq!(cli.client_id, "id");
        assert_eq!(cli.client_secret, "secret");
        assert!(matches!(
            cli.command,
            Commands::Banks(commands::banks::BanksArgs {
                command: commands::banks::BanksCommand::Get { id: 408 }
            })
        ));
    }
}
