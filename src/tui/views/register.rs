//! Transaction register view
//!
//! Header with key hints and the transaction table, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{ListView, RowView};
use crate::models::TransactionKind;

/// Render the header with key hints
pub fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Pocket Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new("a:Add  d:Delete  C:Clear all  j/k:Move  q:Quit")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the transaction list, or the placeholder when it is empty
pub fn render_list(frame: &mut Frame, list: &ListView, selected: usize, area: Rect) {
    let block = Block::default()
        .title(" Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = match list {
        ListView::Placeholder(text) => {
            let paragraph = Paragraph::new(*text)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
            return;
        }
        ListView::Rows(rows) => rows,
    };

    let widths = [
        Constraint::Min(20),    // Description
        Constraint::Length(17), // Created
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Description").style(bold),
        Cell::from("Created").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows.iter().map(table_row), widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(selected.min(rows.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row(row: &RowView) -> Row<'_> {
    let amount_color = match row.kind {
        TransactionKind::Income => Color::Green,
        TransactionKind::Expense => Color::Red,
    };

    Row::new(vec![
        Cell::from(row.description.as_str()),
        Cell::from(row.timestamp.as_str()).style(Style::default().fg(Color::DarkGray)),
        Cell::from(format!("{:>12}", row.amount)).style(Style::default().fg(amount_color)),
    ])
}
