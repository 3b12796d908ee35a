//! Modal dialogs

pub mod confirm;
pub mod transaction;

pub use confirm::ConfirmAction;
pub use transaction::{TransactionField, TransactionFormState};
