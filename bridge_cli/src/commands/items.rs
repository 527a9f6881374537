use anyhow::Result;
use bridge_api::Client;
use clap::{Args, Subcommand};

use crate::output::print_response;

#[derive(Args)]
pub struct ItemsArgs {
    /// User access token
    #[arg(long, env = "BRIDGE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,

    #[command(subcommand)]
    pub command: ItemsCommand,
}

#[derive(Subcommand)]
pub enum ItemsCommand {
    /// Start connecting a bank
    Connect {
        #[arg(long)]
        bank_id: i64,
        /// Where the user lands once the connection completes
        #[arg(long)]
        redirect_url: Option<String>,
    },
    /// List the user's items
    List,
    /// Get a single item by ID
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Show an item's synchronisation status
    Status {
        #[arg(long)]
        id: i64,
    },
    /// Ask for an item to be synchronised
    Refresh {
        #[arg(long)]
        id: i64,
    },
    /// Show the progress of the last refresh
    RefreshStatus {
        #[arg(long)]
        id: i64,
    },
    /// Delete an item
    Delete {
        #[arg(long)]
        id: i64,
    },
}

pub async fn run(args: &ItemsArgs, client: &Client) -> Result<()> {
    let items = client.items();
    let token = args.token.as_str();
    let resp = match &args.command {
        ItemsCommand::Connect {
            bank_id,
            redirect_url,
        } => {
            items
                .connect(*bank_id, token, redirect_url.as_deref())
                .await?
        }
        ItemsCommand::List => items.list(token).await?,
        ItemsCommand::Get { id } => items.retrieve(*id, token).await?,
        ItemsCommand::Status { id } => items.status(*id, token).await?,
        ItemsCommand::Refresh { id } => items.refresh(*id, token).await?,
        ItemsCommand::RefreshStatus { id } => items.refresh_status(*id, token).await?,
        ItemsCommand::Delete { id } => items.delete(*id, token).await?,
    };
    print_response(resp.as_ref());
    Ok(())
}
