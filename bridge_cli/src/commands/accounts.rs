use anyhow::Result;
use bridge_api::Client;
use clap::{Args, Subcommand};

use crate::output::print_response;

#[derive(Args)]
pub struct AccountsArgs {
    /// User access token
    #[arg(long, env = "BRIDGE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,

    #[command(subcommand)]
    pub command: AccountsCommand,
}

#[derive(Subcommand)]
pub enum AccountsCommand {
    /// List the user's accounts
    List,
    /// Get a single account by ID
    Get {
        #[arg(long)]
        id: i64,
    },
}

pub async fn run(args: &AccountsArgs, client: &Client) -> Result<()> {
    let resp = match &args.command {
        AccountsCommand::List => client.accounts().list(&args.token).await?,
        AccountsCommand::Get { id } => client.accounts().retrieve(*id, &args.token).await?,
    };
    print_response(resp.as_ref());
    Ok(())
}
