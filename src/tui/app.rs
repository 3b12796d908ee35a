//! Application state for the TUI
//!
//! The App struct owns the ledger controller plus the UI-only state needed
//! for rendering and handling events.

use log::error;

use crate::config::Settings;
use crate::error::LedgerError;
use crate::services::{clear_with_confirmation, submit, ClearOutcome, Ledger};
use crate::storage::KeyValueStorage;

use super::dialogs::{ConfirmAction, TransactionFormState};
use super::widgets::Notification;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    Confirm(ConfirmAction),
}

/// Main application state
pub struct App<S> {
    pub ledger: Ledger<S>,

    pub settings: Settings,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Selected row in the transaction list
    pub selected_index: usize,

    pub transaction_form: TransactionFormState,

    /// Status-line message, cleared once expired
    pub notification: Option<Notification>,
}

impl<S: KeyValueStorage> App<S> {
    pub fn new(ledger: Ledger<S>, settings: Settings) -> Self {
        let transaction_form = TransactionFormState::new(settings.default_kind);
        Self {
            ledger,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            transaction_form,
            notification: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notification once it has expired
    pub fn tick(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form.reset(self.settings.default_kind);
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.ledger.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.ledger.len().saturating_sub(1));
    }

    /// Submit the add-transaction form
    ///
    /// Validation and save errors stay in the dialog with the typed values;
    /// the form is reset and closed on success.
    pub fn submit_transaction(&mut self) {
        let form = self.transaction_form.to_form();
        match submit(&mut self.ledger, &form) {
            Ok(txn) => {
                self.transaction_form.reset(self.settings.default_kind);
                self.close_dialog();
                self.selected_index = 0;
                self.notify(Notification::success(format!(
                    "Added '{}'",
                    txn.description
                )));
            }
            Err(LedgerError::Validation(message)) => {
                self.transaction_form.error_message = Some(message);
            }
            Err(e) => {
                error!("Failed to save transaction: {}", e);
                self.transaction_form.error_message = Some(format!("Not saved: {}", e));
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Delete the selected transaction
    pub fn delete_selected(&mut self) {
        let Some(id) = self
            .ledger
            .transactions()
            .get(self.selected_index)
            .map(|t| t.id.clone())
        else {
            return;
        };

        match self.ledger.remove_transaction(&id) {
            Ok(_) => {
                self.clamp_selection();
                self.notify(Notification::info("Transaction deleted"));
            }
            Err(e) => {
                error!("Failed to delete transaction {}: {}", id, e);
                self.notify(Notification::error(format!(
                    "Not deleted, entry kept: {}",
                    e
                )));
            }
        }
    }

    /// Ask for confirmation before clearing everything
    pub fn request_clear_all(&mut self) {
        if self.ledger.is_empty() {
            self.notify(Notification::info("Nothing to clear"));
            return;
        }
        let count = self.ledger.len();
        self.open_dialog(ActiveDialog::Confirm(ConfirmAction::ClearAll(count)));
    }

    /// Resolve the pending confirmation
    pub fn answer_confirmation(&mut self, confirmed: bool) {
        let ActiveDialog::Confirm(action) = self.active_dialog.clone() else {
            return;
        };
        self.close_dialog();

        match action {
            ConfirmAction::ClearAll(_) => {
                match clear_with_confirmation(&mut self.ledger, || confirmed) {
                    Ok(ClearOutcome::Cleared(count)) => {
                        self.selected_index = 0;
                        self.notify(Notification::info(format!(
                            "Cleared {} transaction(s)",
                            count
                        )));
                    }
                    Ok(ClearOutcome::Cancelled) => {}
                    Err(e) => {
                        error!("Failed to clear transactions: {}", e);
                        self.notify(Notification::error(e.to_string()));
                    }
                }
            }
        }
    }
}
