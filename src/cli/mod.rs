//! CLI command handlers
//!
//! Connects clap argument parsing with the service layer.

pub mod ledger;

pub use ledger::{handle_ledger_command, resolve_id, LedgerCommands};
