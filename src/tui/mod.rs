//! Terminal User Interface module
//!
//! An interactive front end over the same ledger controller the CLI uses:
//! a transaction table, a summary panel, an add dialog and a clear-all
//! confirmation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod dialogs;
pub mod layout;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
