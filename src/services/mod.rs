//! Service layer for Pocket Ledger
//!
//! The ledger controller and the input validation in front of it.

pub mod input;
pub mod ledger;

pub use input::{
    clear_with_confirmation, submit, ClearOutcome, InputError, TransactionForm, ValidEntry,
};
pub use ledger::Ledger;
