//! Display formatting
//!
//! The view projection shared by all front ends, plus plain-text output for
//! the command line.

pub mod table;
pub mod view;

pub use table::{format_ledger, format_summary, format_transaction_table};
pub use view::{
    project, DisplayOptions, LedgerView, ListView, RowView, Summary, SummaryView,
    EMPTY_PLACEHOLDER, NO_DESCRIPTION,
};
