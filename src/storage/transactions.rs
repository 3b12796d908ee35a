//! Transaction store
//!
//! Serializes the whole ledger as one JSON array under a fixed storage key.
//! Loading never fails: unreadable data is logged and treated as empty.

use std::collections::HashSet;

use log::{debug, error, warn};

use crate::error::LedgerResult;
use crate::models::Transaction;

use super::kv::KeyValueStorage;

/// Storage key holding the serialized ledger
pub const STORAGE_KEY: &str = "pf_tracker_transactions_v1";

/// Loads and saves the transaction list through a key-value backend
#[derive(Debug)]
pub struct TransactionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TransactionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted list
    ///
    /// A missing key yields an empty list. A blob that is not a JSON array is
    /// logged and yields an empty list. Individual entries that fail to parse
    /// or validate are skipped with a warning.
    pub fn load(&self) -> Vec<Transaction> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read stored transactions: {}", e);
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to parse stored transactions: {}", e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let transactions: Vec<Transaction> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let mut txn: Transaction = match serde_json::from_value(value) {
                    Ok(txn) => txn,
                    Err(e) => {
                        warn!("Skipping stored transaction #{}: {}", index, e);
                        return None;
                    }
                };
                txn.amount = txn.amount.abs();

                if let Err(e) = txn.validate() {
                    warn!("Skipping stored transaction #{}: {}", index, e);
                    return None;
                }
                if !seen.insert(txn.id.clone()) {
                    warn!("Skipping stored transaction #{}: duplicate id {}", index, txn.id);
                    return None;
                }
                Some(txn)
            })
            .collect();

        debug!("Loaded {} transactions", transactions.len());
        transactions
    }

    /// Persist the full list, replacing whatever was stored before
    pub fn save(&mut self, transactions: &[Transaction]) -> LedgerResult<()> {
        let blob = serde_json::to_string_pretty(transactions)?;
        self.storage.set(STORAGE_KEY, &blob)?;
        debug!("Saved {} transactions", transactions.len());
        Ok(())
    }
}
