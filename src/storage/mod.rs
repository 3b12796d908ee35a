//! Storage layer for Pocket Ledger
//!
//! A key-value backend (files on disk, or memory) plus the transaction store
//! that keeps the whole ledger under one key.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStorage, KeyValueStorage, MemoryStorage};
#[cfg(test)]
pub(crate) use kv::ReadOnlyStorage;
pub use transactions::{TransactionStore, STORAGE_KEY};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Open the file-backed transaction store under the configured data directory
pub fn open_file_store(paths: &LedgerPaths) -> Result<TransactionStore<FileStorage>, LedgerError> {
    paths.ensure_directories()?;
    Ok(TransactionStore::new(FileStorage::new(paths.data_dir())))
}
