//! Status bar view
//!
//! Shows the current notification, or the transaction count and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStorage;
use crate::tui::app::App;
use crate::tui::widgets::NotificationWidget;

/// Render the status bar
pub fn render<S: KeyValueStorage>(frame: &mut Frame, app: &App<S>, area: Rect) {
    if let Some(ref notification) = app.notification {
        frame.render_widget(NotificationWidget::new(notification), area);
        return;
    }

    let count = format!(" {} transaction(s)", app.ledger.len());
    let hints = " q:Quit ";

    let padding_len = (area.width as usize)
        .saturating_sub(count.chars().count())
        .saturating_sub(hints.len());

    let line = Line::from(vec![
        Span::styled(count, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len.max(1))),
        Span::styled(hints, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
