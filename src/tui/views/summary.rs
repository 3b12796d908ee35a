//! Summary panel: total income, total expenses and balance

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::LedgerView;

pub fn render(frame: &mut Frame, view: &LedgerView, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let balance_color = if view.totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Income: ", Style::default().fg(Color::White)),
        Span::styled(view.summary.income.as_str(), Style::default().fg(Color::Green)),
        Span::raw("  │  "),
        Span::styled("Expenses: ", Style::default().fg(Color::White)),
        Span::styled(view.summary.expenses.as_str(), Style::default().fg(Color::Red)),
        Span::raw("  │  "),
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            view.summary.balance.as_str(),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
