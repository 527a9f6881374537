use anyhow::Result;
use bridge_api::Client;
use clap::{Args, Subcommand};

use crate::output::print_response;

#[derive(Args)]
pub struct BanksArgs {
    #[command(subcommand)]
    pub command: BanksCommand,
}

#[derive(Subcommand)]
pub enum BanksCommand {
    /// List supported banks
    List,
    /// Get a single bank by ID
    Get {
        #[arg(long)]
        id: i64,
    },
}

pub async fn run(args: &BanksArgs, client: &Client) -> Result<()> {
    let resp = match &args.command {
        BanksCommand::List => client.banks().list().await?,
        BanksCommand::Get { id } => client.banks().retrieve(*id).await?,
    };
    print_response(resp.as_ref());
    Ok(())
}
