//! Confirmation dialog
//!
//! Destructive actions wait here for an explicit yes.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Action waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove every transaction; holds the current count
    ClearAll(usize),
}

impl ConfirmAction {
    pub fn message(&self) -> String {
        match self {
            Self::ClearAll(count) => format!(
                "Clear all {} transaction(s)? This cannot be undone.",
                count
            ),
        }
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect_fixed(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(action.message(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[n/Esc]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_all_message() {
        assert_eq!(
            ConfirmAction::ClearAll(3).message(),
            "Clear all 3 transaction(s)? This cannot be undone."
        );
    }
}
