//! Event handler for the TUI
//!
//! Routes keyboard events to the list or to the active dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::storage::KeyValueStorage;

use super::app::{ActiveDialog, App};
use super::dialogs::TransactionField;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStorage>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event<S: KeyValueStorage>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_list_key(app, key),
        ActiveDialog::AddTransaction => handle_form_key(app, key),
        ActiveDialog::Confirm(_) => handle_confirm_key(app, key),
    }
}

/// Keys while browsing the transaction list
fn handle_list_key<S: KeyValueStorage>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.ledger.len().saturating_sub(1);
        }
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('C') => app.request_clear_all(),
        _ => {}
    }
}

/// Keys inside the add-transaction dialog
fn handle_form_key<S: KeyValueStorage>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return;
        }
        KeyCode::Enter => {
            app.submit_transaction();
            return;
        }
        _ => {}
    }

    let form = &mut app.transaction_form;
    match key.code {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        _ => {}
    }

    if form.focused_field == TransactionField::Kind {
        if matches!(
            key.code,
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
        ) {
            form.toggle_kind();
        }
        return;
    }

    if let Some(input) = form.focused_input_mut() {
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }
}

/// Keys while a confirmation is pending
fn handle_confirm_key<S: KeyValueStorage>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirmation(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirmation(false),
        _ => {}
    }
}
