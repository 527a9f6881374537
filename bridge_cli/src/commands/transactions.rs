use anyhow::Result;
use bridge_api::Client;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Subcommand};

use crate::output::print_response;

#[derive(Args)]
pub struct TransactionsArgs {
    /// User access token
    #[arg(long, env = "BRIDGE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,

    #[command(subcommand)]
    pub command: TransactionsCommand,
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List transactions up to a date
    List {
        /// Upper bound (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS). Defaults to now.
        #[arg(long, value_parser = parse_datetime)]
        until: Option<NaiveDateTime>,
    },
    /// List transactions created or modified since a date
    Updated {
        /// Lower bound (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = parse_datetime)]
        since: NaiveDateTime,
    },
    /// Get a single transaction by ID
    Get {
        #[arg(long)]
        id: i64,
    },
}

pub async fn run(args: &TransactionsArgs, client: &Client) -> Result<()> {
    let transactions = client.transactions();
    let resp = match &args.command {
        TransactionsCommand::List { until } => {
            let until = until.unwrap_or_else(|| Utc::now().naive_utc());
            transactions.list(&until, &args.token).await?
        }
        TransactionsCommand::Updated { since } => {
            transactions.list_updated(since, &args.token).await?
        }
        TransactionsCommand::Get { id } => transactions.retrieve(*id, &args.token).await?,
    };
    print_response(resp.as_ref());
    Ok(())
}

/// Accepts a full date-time or a bare date, which means midnight.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, String> {
    let input = input.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            format!(
                "invalid date '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                input
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_is_midnight() {
        let parsed = parse_datetime("2024-01-15").unwrap();
        assert_eq!(bridge_api::iso_datetime(&parsed), "2024-01-15T00:00:00");
    }

    #[test]
    fn full_datetime_is_kept() {
        let parsed = parse_datetime("2024-01-15T08:30:00").unwrap();
        assert_eq!(bridge_api::iso_datetime(&parsed), "2024-01-15T08:30:00");
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_datetime("15/01/2024").unwrap_err();
        assert!(err.contains("15/01/2024"));
    }
}
