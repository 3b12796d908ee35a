//! Ledger view projection
//!
//! `project` turns the transaction list into everything a front end shows:
//! list rows (or a placeholder) and the three summary figures. It is a pure
//! function of its inputs; the CLI and the TUI both draw from it.

use std::fmt::Write as _;

use chrono::{DateTime, Local, Utc};

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

/// Shown instead of rows when the ledger is empty
pub const EMPTY_PLACEHOLDER: &str = "No transactions yet.";

/// Shown for transactions without a description
pub const NO_DESCRIPTION: &str = "(no description)";

const FALLBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number and date formatting used by the projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub timestamp_format: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            timestamp_format: settings.timestamp_format.clone(),
            thousands_separator: settings.thousands_separator.clone(),
            decimal_separator: settings.decimal_separator.clone(),
        }
    }
}

impl DisplayOptions {
    /// Two decimals with digit grouping
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_grouped(&self.thousands_separator, &self.decimal_separator)
    }

    /// Amount prefixed with `+` for income and `-` for expenses
    pub fn format_signed(&self, kind: TransactionKind, amount: Money) -> String {
        format!("{}{}", kind.sign(), self.format_money(amount.abs()))
    }

    /// Creation time in the local time zone
    ///
    /// An invalid format string falls back to `%Y-%m-%d %H:%M`.
    pub fn format_timestamp(&self, created: DateTime<Utc>) -> String {
        let local = created.with_timezone(&Local);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.timestamp_format)).is_err() {
            out = local.format(FALLBACK_TIMESTAMP_FORMAT).to_string();
        }
        out
    }
}

/// Aggregate totals over a list of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount.abs())
            .sum();
        let expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.abs())
            .sum();

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// One rendered transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Id the delete action is bound to
    pub id: TransactionId,
    pub description: String,
    pub timestamp: String,
    pub amount: String,
    pub kind: TransactionKind,
}

/// The list area: either a placeholder or one row per transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Placeholder(&'static str),
    Rows(Vec<RowView>),
}

impl ListView {
    /// Rendered rows; empty for the placeholder
    pub fn rows(&self) -> &[RowView] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Rows(rows) => rows,
        }
    }

    /// Number of selectable rows
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }
}

/// Formatted summary figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub income: String,
    pub expenses: String,
    pub balance: String,
}

/// Everything a front end needs to draw the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub list: ListView,
    pub summary: SummaryView,
    pub totals: Summary,
}

/// Project the transaction list, in order, into a view
pub fn project(transactions: &[Transaction], options: &DisplayOptions) -> LedgerView {
    let list = if transactions.is_empty() {
        ListView::Placeholder(EMPTY_PLACEHOLDER)
    } else {
        ListView::Rows(
            transactions
                .iter()
                .map(|txn| RowView {
                    id: txn.id.clone(),
                    description: if txn.description.is_empty() {
                        NO_DESCRIPTION.to_string()
                    } else {
                        txn.description.clone()
                    },
                    timestamp: options.format_timestamp(txn.created),
                    amount: options.format_signed(txn.kind, txn.amount),
                    kind: txn.kind,
                })
                .collect(),
        )
    };

    let totals = Summary::from_transactions(transactions);
    let summary = SummaryView {
        income: options.format_money(totals.income),
        expenses: options.format_money(totals.expenses),
        balance: options.format_money(totals.balance),
    };

    LedgerView {
        list,
        summary,
        totals,
    }
}
