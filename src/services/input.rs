//! Input handling
//!
//! Validates raw form values before they reach the ledger, and gates
//! clear-all behind an explicit confirmation.

use thiserror::Error;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind, UnknownKind};
use crate::storage::KeyValueStorage;

use super::ledger::Ledger;

/// User-facing validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please add a description")]
    EmptyDescription,

    /// Amount is not a number, or rounds to zero
    #[error("Please enter a non-zero amount")]
    InvalidAmount(String),

    #[error("Please enter an amount no larger than {}", Money::MAX_AMOUNT)]
    AmountTooLarge(String),

    #[error("{0}")]
    UnknownKind(UnknownKind),
}

impl From<InputError> for LedgerError {
    fn from(err: InputError) -> Self {
        LedgerError::Validation(err.to_string())
    }
}

/// Raw values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub description: String,
    /// Always positive
    pub amount: Money,
    pub kind: TransactionKind,
}

impl TransactionForm {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
        }
    }

    /// Check the form, in field order
    pub fn validate(&self) -> Result<ValidEntry, InputError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(InputError::EmptyDescription);
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| InputError::InvalidAmount(self.amount.clone()))?;
        if amount.is_zero() {
            return Err(InputError::InvalidAmount(self.amount.clone()));
        }
        if !amount.within_limit() {
            return Err(InputError::AmountTooLarge(self.amount.clone()));
        }

        let kind = self
            .kind
            .parse::<TransactionKind>()
            .map_err(InputError::UnknownKind)?;

        Ok(ValidEntry {
            description: description.to_string(),
            amount: amount.abs(),
            kind,
        })
    }

    /// Empty the text fields and restore the default type
    pub fn reset(&mut self, default_kind: TransactionKind) {
        self.description.clear();
        self.amount.clear();
        self.kind = default_kind.as_str().to_string();
    }
}

/// Validate a form and record it
///
/// On validation failure nothing is changed and the error carries the message
/// to show the user.
pub fn submit<S: KeyValueStorage>(
    ledger: &mut Ledger<S>,
    form: &TransactionForm,
) -> LedgerResult<Transaction> {
    let entry = form.validate()?;
    let txn = ledger.add_transaction(entry.description, entry.amount, entry.kind)?;
    Ok(txn.clone())
}

/// Result of a clear-all request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The ledger was emptied; holds the number of removed entries
    Cleared(usize),
    Cancelled,
}

/// Clear the ledger if `confirm` returns true
pub fn clear_with_confirmation<S, F>(ledger: &mut Ledger<S>, confirm: F) -> LedgerResult<ClearOutcome>
where
    S: KeyValueStorage,
    F: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(ClearOutcome::Cancelled);
    }
    Ok(ClearOutcome::Cleared(ledger.clear_all()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, TransactionStore};

    fn empty_ledger() -> Ledger<MemoryStorage> {
        Ledger::open(TransactionStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_validate_trims_description() {
        let entry = TransactionForm::new("  Coffee  ", "-3.5", "expense")
            .validate()
            .unwrap();

        assert_eq!(entry.description, "Coffee");
        assert_eq!(entry.amount, Money::from_cents(350));
        assert_eq!(entry.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = TransactionForm::new("   ", "10", "income")
            .validate()
            .unwrap_err();
        assert_eq!(err, InputError::EmptyDescription);
        assert_eq!(err.to_string(), "Please add a description");
    }

    #[test]
    fn test_bad_amounts_rejected() {
        for amount in ["", "abc", "0", "0.00", "-0", "0.001", "NaN"] {
            let err = TransactionForm::new("Coffee", amount, "expense")
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, InputError::InvalidAmount(_)),
                "amount {:?} should be rejected",
                amount
            );
            assert_eq!(err.to_string(), "Please enter a non-zero amount");
        }
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let err = TransactionForm::new("Lottery", "50000000000000000", "income")
            .validate()
            .unwrap_err();
        assert!(matches!(err, InputError::AmountTooLarge(_)));
        assert_eq!(
            err.to_string(),
            "Please enter an amount no larger than 999,999,999,999.99"
        );

        let entry = TransactionForm::new("Lottery", "999999999999.99", "income")
            .validate()
            .unwrap();
        assert_eq!(entry.amount, Money::MAX_AMOUNT);
    }

    #[test]
    fn test_largest_amounts_still_render() {
        let mut ledger = empty_ledger();
        for _ in 0..3 {
            submit(&mut ledger, &TransactionForm::new("Big", "999999999999.99", "income")).unwrap();
        }
        submit(&mut ledger, &TransactionForm::new("Bigger", "50000000000000000", "income"))
            .unwrap_err();

        let view = ledger.render();
        assert_eq!(ledger.len(), 3);
        assert_eq!(view.summary.income, "2,999,999,999,999.97");
        assert_eq!(view.summary.balance, "2,999,999,999,999.97");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = TransactionForm::new("Refund", "10", "transfer")
            .validate()
            .unwrap_err();
        assert!(matches!(err, InputError::UnknownKind(_)));
        assert!(err.to_string().contains("transfer"));
    }

    #[test]
    fn test_submit_adds_first_entry() {
        let mut ledger = empty_ledger();
        submit(&mut ledger, &TransactionForm::new("Old", "1", "income")).unwrap();

        let txn = submit(&mut ledger, &TransactionForm::new("Coffee", "-3.5", "expense")).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].id, txn.id);
        assert_eq!(txn.amount, Money::from_cents(350));
    }

    #[test]
    fn test_submit_invalid_leaves_ledger_unchanged() {
        let mut ledger = empty_ledger();
        submit(&mut ledger, &TransactionForm::new("Rent", "800", "expense")).unwrap();
        let before = ledger.transactions().to_vec();

        let err = submit(&mut ledger, &TransactionForm::new("", "5", "expense")).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Please add a description");
        assert_eq!(ledger.transactions(), before.as_slice());
    }

    #[test]
    fn test_reset() {
        let mut form = TransactionForm::new("Coffee", "3.5", "income");
        form.reset(TransactionKind::Expense);
        assert_eq!(form, TransactionForm::new("", "", "expense"));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut ledger = empty_ledger();
        submit(&mut ledger, &TransactionForm::new("Rent", "800", "expense")).unwrap();

        let outcome = clear_with_confirmation(&mut ledger, || false).unwrap();
        assert_eq!(outcome, ClearOutcome::Cancelled);
        assert_eq!(ledger.len(), 1);

        let outcome = clear_with_confirmation(&mut ledger, || true).unwrap();
        assert_eq!(outcome, ClearOutcome::Cleared(1));
        assert!(ledger.is_empty());
    }
}
