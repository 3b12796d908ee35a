//! Add-transaction dialog
//!
//! Description and amount text fields plus an income/expense toggle. Tab
//! cycles focus; Enter submits through the input handler.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::services::TransactionForm;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Kind,
}

impl TransactionField {
    /// Next field (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Description,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Kind => Self::Amount,
        }
    }
}

/// State for the add-transaction dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub kind: TransactionKind,
    /// Validation message from the last submit attempt
    pub error_message: Option<String>,
}

impl TransactionFormState {
    pub fn new(default_kind: TransactionKind) -> Self {
        Self {
            focused_field: TransactionField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            kind: default_kind,
            error_message: None,
        }
    }

    /// Raw values for the input handler
    pub fn to_form(&self) -> TransactionForm {
        TransactionForm::new(
            self.description_input.value(),
            self.amount_input.value(),
            self.kind.as_str(),
        )
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    /// The text field with focus, if a text field is focused
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Kind => None,
        }
    }

    /// Clear the fields after a successful submit
    pub fn reset(&mut self, default_kind: TransactionKind) {
        *self = Self::new(default_kind);
    }
}

/// Render the add-transaction dialog
pub fn render(frame: &mut Frame, state: &TransactionFormState) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Type
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = state.focused_field;
    frame.render_widget(
        state
            .description_input
            .clone()
            .focused(focused == TransactionField::Description),
        rows[0],
    );
    frame.render_widget(
        state
            .amount_input
            .clone()
            .focused(focused == TransactionField::Amount),
        rows[2],
    );

    let selected = Style::default()
        .fg(Color::Black)
        .bg(if focused == TransactionField::Kind {
            Color::Cyan
        } else {
            Color::Gray
        });
    let unselected = Style::default().fg(Color::DarkGray);
    let kind_line = Line::from(vec![
        Span::styled("Type", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(
            " Income ",
            if state.kind == TransactionKind::Income {
                selected
            } else {
                unselected
            },
        ),
        Span::raw(" "),
        Span::styled(
            " Expense ",
            if state.kind == TransactionKind::Expense {
                selected
            } else {
                unselected
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(kind_line), rows[4]);

    if let Some(ref message) = state.error_message {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red)),
            rows[6],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" Toggle type  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[7]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let field = TransactionField::Description;
        assert_eq!(field.next(), TransactionField::Amount);
        assert_eq!(field.next().next().next(), TransactionField::Description);
        assert_eq!(field.prev(), TransactionField::Kind);
    }

    #[test]
    fn test_to_form() {
        let mut state = TransactionFormState::new(TransactionKind::Expense);
        for c in "Coffee".chars() {
            state.focused_input_mut().unwrap().insert(c);
        }
        state.next_field();
        for c in "3.50".chars() {
            state.focused_input_mut().unwrap().insert(c);
        }
        state.next_field();
        assert!(state.focused_input_mut().is_none());
        state.toggle_kind();

        assert_eq!(state.to_form(), TransactionForm::new("Coffee", "3.50", "income"));
    }

    #[test]
    fn test_reset() {
        let mut state = TransactionFormState::new(TransactionKind::Income);
        state.description_input.insert('x');
        state.error_message = Some("oops".into());
        state.next_field();

        state.reset(TransactionKind::Expense);
        assert_eq!(state.description_input.value(), "");
        assert_eq!(state.focused_field, TransactionField::Description);
        assert_eq!(state.kind, TransactionKind::Expense);
        assert!(state.error_message.is_none());
    }
}
