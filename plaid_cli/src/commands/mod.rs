//! CLI subcommand implementations.

pub mod accounts;
pub mod balances;
