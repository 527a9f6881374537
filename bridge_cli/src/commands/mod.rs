//! CLI subcommand implementations.

pub mod accounts;
pub mod banks;
pub mod items;
pub mod transactions;
pub mod users;
