//! Pocket Ledger - a terminal income/expense ledger
//!
//! Transactions are kept newest first, persisted as a JSON array under a
//! single storage key and projected into a list plus income, expense and
//! balance totals.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: the crate error type
//! - `models`: money, ids and transactions
//! - `storage`: key-value persistence and the transaction store
//! - `services`: the ledger controller and input validation
//! - `display`: the pure view projection and table formatting
//! - `cli`: command handlers
//! - `tui`: the interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::LedgerPaths;
//! use pocket_ledger::services::Ledger;
//! use pocket_ledger::storage::open_file_store;
//!
//! let paths = LedgerPaths::new()?;
//! let mut ledger = Ledger::open(open_file_store(&paths)?);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
