//! Ledger controller
//!
//! Owns the in-memory transaction list and the store it is synchronized
//! with. Every mutation persists the whole list before returning; front ends
//! call [`Ledger::render`] afterwards to redraw.

use log::{debug, info};

use crate::display::{project, DisplayOptions, LedgerView, Summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::{KeyValueStorage, TransactionStore};

/// The ledger state and its operations
#[derive(Debug)]
pub struct Ledger<S> {
    transactions: Vec<Transaction>,
    store: TransactionStore<S>,
    display: DisplayOptions,
}

impl<S: KeyValueStorage> Ledger<S> {
    /// Load the persisted list and take ownership of the store
    pub fn open(store: TransactionStore<S>) -> Self {
        let transactions = store.load();
        Self {
            transactions,
            store,
            display: DisplayOptions::default(),
        }
    }

    /// Use the given formatting for [`Ledger::render`]
    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Transactions whose id starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.id.matches_prefix(prefix))
            .collect()
    }

    /// Record a new transaction at the front of the list
    ///
    /// The amount is stored as its absolute value. A zero amount is rejected.
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
    ) -> LedgerResult<&Transaction> {
        let txn = Transaction::new(description, amount, kind);
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut next = Vec::with_capacity(self.transactions.len() + 1);
        next.push(txn);
        next.extend_from_slice(&self.transactions);
        self.commit(next)?;

        let txn = &self.transactions[0];
        info!("Added {} {} ({})", kind.as_str(), txn.amount, txn.id);
        Ok(txn)
    }

    /// Remove the transaction with the given id
    ///
    /// Returns whether an entry was removed. An unknown id is not an error.
    pub fn remove_transaction(&mut self, id: &TransactionId) -> LedgerResult<bool> {
        let next: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| &t.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.transactions.len();
        self.commit(next)?;

        if removed {
            info!("Removed transaction {}", id);
        } else {
            debug!("No transaction with id {}", id);
        }
        Ok(removed)
    }

    /// Remove every transaction
    ///
    /// Callers are responsible for asking the user first.
    pub fn clear_all(&mut self) -> LedgerResult<usize> {
        let count = self.transactions.len();
        self.commit(Vec::new())?;
        info!("Cleared {} transactions", count);
        Ok(count)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }

    /// Project the current state into a view
    pub fn render(&self) -> LedgerView {
        project(&self.transactions, &self.display)
    }

    /// Save `next` and make it the current list
    ///
    /// On a failed save the current list is left unchanged.
    fn commit(&mut self, next: Vec<Transaction>) -> LedgerResult<()> {
        self.store.save(&next)?;
        self.transactions = next;
        Ok(())
    }
}
