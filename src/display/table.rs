//! Terminal output for the command line
//!
//! Prints a `LedgerView` as a table followed by the summary block.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use super::view::{LedgerView, ListView, SummaryView};

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the transaction list (or the placeholder) as a table
pub fn format_transaction_table(view: &LedgerView) -> String {
    let rows = match &view.list {
        ListView::Placeholder(text) => return format!("{}\n", text),
        ListView::Rows(rows) => rows,
    };

    let table_rows = rows.iter().map(|row| TableRow {
        id: row.id.short().to_string(),
        description: truncate(&row.description, 40),
        created: row.timestamp.clone(),
        amount: row.amount.clone(),
    });

    let mut table = Table::new(table_rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format the three summary figures, right-aligned
pub fn format_summary(summary: &SummaryView) -> String {
    let width = [&summary.income, &summary.expenses, &summary.balance]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    format!(
        "Income:   {:>w$}\nExpenses: {:>w$}\nBalance:  {:>w$}\n",
        summary.income,
        summary.expenses,
        summary.balance,
        w = width
    )
}

/// Table and summary, separated by a blank line
pub fn format_ledger(view: &LedgerView) -> String {
    format!(
        "{}\n{}",
        format_transaction_table(view),
        format_summary(&view.summary)
    )
}

/// Truncate a string to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
