use anyhow::Result;
use bridge_api::Client;
use clap::{Args, Subcommand};

use crate::output::print_response;

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// Create a user
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Authenticate a user and print the authentication response
    Authenticate {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Invalidate an access token
    Logout {
        #[arg(long, env = "BRIDGE_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// List users
    List,
    /// Get a single user by UUID
    Get {
        #[arg(long)]
        uuid: String,
    },
    /// Change a user's password
    ChangePassword {
        #[arg(long)]
        uuid: String,
        #[arg(long)]
        current_password: String,
        #[arg(long)]
        new_password: String,
    },
    /// Delete a user
    Delete {
        #[arg(long)]
        uuid: String,
        #[arg(long)]
        password: String,
    },
    /// Delete every user (sandbox only)
    DeleteAll,
}

pub async fn run(args: &UsersArgs, client: &Client) -> Result<()> {
    let users = client.users();
    let resp = match &args.command {
        UsersCommand::Create { email, password } => users.create(email, password).await?,
        UsersCommand::Authenticate { email, password } => {
            users.authenticate(email, password).await?
        }
        UsersCommand::Logout { token } => users.logout(token).await?,
        UsersCommand::List => users.list().await?,
        UsersCommand::Get { uuid } => users.retrieve(uuid).await?,
        UsersCommand::ChangePassword {
            uuid,
            current_password,
            new_password,
        } => users.edit(uuid, current_password, new_password).await?,
        UsersCommand::Delete { uuid, password } => users.delete(uuid, password).await?,
        UsersCommand::DeleteAll => users.delete_all().await?,
    };
    print_response(resp.as_ref());
    Ok(())
}
